use miette::Result;

/// Main entry point for the digraph-dfs CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    digraph_dfs::run()
}
