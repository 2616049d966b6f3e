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

use thiserror::Error;

/// Errors raised while building or changing a [`crate::Catalog`].
///
/// The lookup, formatting and search functions never fail; every
/// precondition they rely on (a non-empty catalog, well formed dial codes)
/// is checked here instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one country")]
    Empty,
    #[error("Country {0:?} is listed more than once")]
    DuplicateIso2(String),
    #[error("Invalid iso2 code {0:?}: expected two ASCII letters")]
    InvalidIso2(String),
    #[error("Country {iso2:?} has invalid dial code {dial_code:?}")]
    InvalidDialCode { iso2: String, dial_code: String },
    #[error("Country {iso2:?} has invalid area code {area_code:?}")]
    InvalidAreaCode { iso2: String, area_code: String },
    #[error("Unknown country {0:?}")]
    UnknownCountry(String),
}
