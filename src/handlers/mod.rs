// Handlers by security tier: public (no credential), protected (credential
// required by the access gate), elevated (admin-classified routes).

pub mod elevated;
pub mod protected;
pub mod public;
