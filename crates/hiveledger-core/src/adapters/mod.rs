mod condenser;

pub use condenser::CondenserClient;
