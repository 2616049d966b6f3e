/// Country table compiled into the library.
pub(crate) mod countries;
