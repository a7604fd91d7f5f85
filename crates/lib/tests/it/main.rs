/*! Integration tests for dotconf.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - node: Tests for the tree model and its JSON text form
 * - path: Tests for dotted path syntax
 * - resolver: Tests for reading and writing through dotted paths
 * - configuration: Tests for the file-backed load, create and save lifecycle
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotconf=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod configuration;
mod helpers;
mod node;
mod path;
