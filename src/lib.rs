//! Two self-contained teaching exercises: a shared-ownership handle whose
//! reference counting is carried out explicitly, and three enumerations of all
//! subsets of a sequence. The components are independent of one another.

pub mod driver;
pub mod handle;
pub mod subsets;
