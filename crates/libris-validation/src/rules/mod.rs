//! Domain rule functions
//!
//! A rule function takes the context, the value(s) it checks, any
//! repositories it needs and the validating type and field names. It runs its
//! primitive checks in order, returns at the first failure, and hands back
//! the very context it was given on success. Optional values that are absent
//! cause no primitive check at all.

pub mod aggregates;
pub mod dates;
pub mod numbers;
pub mod patterns;
pub mod references;
pub mod text;

pub use aggregates::*;
pub use dates::*;
pub use numbers::{
    validate_image, validate_lending_limit, validate_length, validate_number_of_tracks,
    validate_year_published,
};
pub use references::*;
pub use text::{
    validate_description, validate_details, validate_full_name,
    validate_international_standard_book_number, validate_internet_link, validate_mail_address,
    validate_name_component, validate_phone_number, validate_subtitle, validate_surname, validate_title,
};
