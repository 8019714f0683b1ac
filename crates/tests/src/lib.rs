#[cfg(test)]
mod common;

#[cfg(test)]
mod verification_flow_tests;

#[cfg(test)]
mod verification_cancel_tests;

#[cfg(test)]
mod shell_flow_tests;

#[cfg(test)]
mod config_tests;
