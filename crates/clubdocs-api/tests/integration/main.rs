//! Integration tests for clubdocs-api
//!
//! Uses wiremock to simulate the club platform API and verifies end-to-end
//! behavior of the HTTP gateway: listings, search, mutations, and the
//! interpretation of error bodies.

mod common;

mod test_errors;
mod test_listing;
mod test_mutations;
mod test_search;
