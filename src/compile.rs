pub(crate) mod compiler;
pub(crate) mod fingerprint;
pub(crate) mod report;
pub(crate) mod resolve;
