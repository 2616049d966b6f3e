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

pub(crate) mod helper_constants;
pub mod errors;
pub mod enums;
pub mod country;
pub mod catalog;
pub mod resolver;
pub mod formatter;
pub mod search;
pub mod navigation;
pub mod validity;
pub mod debounce;
pub mod options;
pub mod phone_input;

use std::sync::LazyLock;

use crate::generated::countries::COUNTRIES;
use catalog::Catalog;
use country::Country;
use errors::CatalogError;

/// Catalog of all compiled-in countries, built on first use.
pub static COUNTRY_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    match load_compiled_catalog() {
        Err(err) => {
            let err_message = format!("Could not build compiled-in country catalog: {:?}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
        Ok(catalog) => catalog,
    }
});

fn load_compiled_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(COUNTRIES.iter().map(Country::from_record).collect())
}
