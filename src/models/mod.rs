pub mod alert;
pub mod caretaker;
pub mod medicine;
pub mod profile;

pub use alert::{Alert, AlertFilter, AlertKind, AlertPriority};
pub use caretaker::{Caretaker, CaretakerInput, Relation};
pub use medicine::{Frequency, Medicine, MedicineFields, MedicineInput};
pub use profile::{Gender, ProfileInput, UserProfile};
