mod scal;

pub use scal::scal;
