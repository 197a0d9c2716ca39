use anyhow::Result;
use compiler::Glslc;
use config::BuildConfig;
use log::Level;
use runner::ShaderBuild;

pub mod compiler;
pub mod config;
pub mod discover;
pub mod output;
pub mod runner;

#[cfg(test)]
mod test_util;

fn main() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let config = BuildConfig::default();
    let compiler = Glslc::new(&config.compiler);
    ShaderBuild::new(config, compiler).run()?.into_result()?;

    Ok(())
}
