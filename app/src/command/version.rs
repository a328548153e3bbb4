/// Strategy that prints the toolkit version.
///
/// Stateless, the simplest form of strategy.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        println!("ukhan {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
