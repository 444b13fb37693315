pub mod circumcircle;

pub use circumcircle::{CircumcircleClass, circumcircle, classify_circumcircle};
