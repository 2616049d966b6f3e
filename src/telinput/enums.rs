// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{EnumIter, IntoEnumIterator};

/// Keys the country list reacts to while it is open.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Moves the highlight towards the top of the list.
    Up,
    /// Moves the highlight towards the bottom of the list.
    Down,
    Left,
    Right,
    /// Selects the highlighted country.
    Enter,
    /// Closes the list without changing the selection.
    Esc,
    Plus,
    /// Part of a type-ahead query, like letters.
    Space,
}

impl Key {
    /// Legacy DOM `keyCode` of the key.
    pub fn code(self) -> u32 {
        match self {
            Key::Up => 38,
            Key::Down => 40,
            Key::Left => 37,
            Key::Right => 39,
            Key::Enter => 13,
            Key::Esc => 27,
            Key::Plus => 43,
            Key::Space => 32,
        }
    }
}

/// A single key press delivered by the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Named(Key),
    /// An ASCII letter, always uppercase.
    Letter(char),
}

impl KeyPress {
    const FIRST_LETTER_CODE: u32 = 65;
    const LAST_LETTER_CODE: u32 = 90;

    /// Maps a DOM `keyCode`. Codes 65 to 90 are the letters A to Z; codes the
    /// list does not care about give `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        if (Self::FIRST_LETTER_CODE..=Self::LAST_LETTER_CODE).contains(&code) {
            return char::from_u32(code).map(KeyPress::Letter);
        }
        Key::iter().find(|key| key.code() == code).map(KeyPress::Named)
    }

    /// Character appended to the type-ahead query, if this key feeds it.
    pub fn query_char(self) -> Option<char> {
        match self {
            KeyPress::Letter(letter) => Some(letter),
            KeyPress::Named(Key::Space) => Some(' '),
            KeyPress::Named(_) => None,
        }
    }
}
