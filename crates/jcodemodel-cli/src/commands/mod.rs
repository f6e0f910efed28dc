pub mod imports;
pub mod inspect;
pub mod type_resolver;

#[cfg(test)]
mod inspect_tests;
#[cfg(test)]
mod type_resolver_tests;
