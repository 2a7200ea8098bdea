use anyhow::Result;
use logic_corpus::utils::logging;
use logic_corpus::{App, ClassicCatalog, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 经典题库作为显式的值交给编排层
    let catalog = ClassicCatalog::builtin()?;

    App::new(config, catalog).run().await?;

    Ok(())
}
