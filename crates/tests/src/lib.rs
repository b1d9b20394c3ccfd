#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod access_matrix_tests;

#[cfg(test)]
mod guard_flow_tests;

#[cfg(test)]
mod login_tests;
