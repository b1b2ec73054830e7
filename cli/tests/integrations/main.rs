mod formulas;
mod proofs;
mod server;
