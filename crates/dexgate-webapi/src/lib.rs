// ----- standard library imports
// ----- extra library imports
// ----- local modules
pub mod amount;
pub mod errors;
pub mod swap;

// ----- end imports
