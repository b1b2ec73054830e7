

// Rules and proofs
mod proof;
mod search;
