//! Error types for `roster-core`.
//!
//! Every message here is user-facing; the command layer prints them verbatim.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(
    "Names should only contain alphanumeric characters and spaces, and it \
     should not be blank"
  )]
  InvalidName(String),

  #[error(
    "Phone numbers should only contain numbers, and it should be at least 3 \
     digits long"
  )]
  InvalidPhone(String),

  #[error(
    "Emails should be of the format local-part@domain and adhere to the \
     following constraints:\n1. The local-part should only contain \
     alphanumeric characters and these special characters, excluding the \
     parentheses, (+_.-). The local-part may not start or end with any \
     special characters.\n2. This is followed by a '@' and then a domain \
     name. The domain name is made up of domain labels separated by periods.\n\
     The domain name must:\n    - end with a domain label at least 2 \
     characters long\n    - have each domain label start and end with \
     alphanumeric characters\n    - have each domain label consist of \
     alphanumeric characters, separated only by hyphens, if any."
  )]
  InvalidEmail(String),

  #[error("Addresses can take any values, and it should not be blank")]
  InvalidAddress(String),

  #[error("Tags names should be alphanumeric")]
  InvalidTag(String),

  #[error("Grade should be 'pri 1' to 'pri 6' or 'sec 1' to 'sec 5'")]
  InvalidGrade(String),

  #[error("Class can take any values, and it should not be blank")]
  InvalidClass(String),

  #[error("Role should be Student, Parent or Staff (case-insensitive)")]
  InvalidRole(String),

  #[error(
    "The Grade and Class attributes should be added for students and parents \
     but not for staff."
  )]
  AcademicFieldsOnStaff,

  #[error("This person already exists in the address book")]
  DuplicatePerson,

  #[error("The person index provided is invalid")]
  IndexOutOfRange(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
