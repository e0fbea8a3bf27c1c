use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lpg_density_dashboard::store::{Dashboard, FileStorage};
use lpg_density_dashboard::{app, i18n};

/// 커맨드라인 옵션.
#[derive(Debug, Parser)]
#[command(name = "lpg_density_dashboard", about = "LPG 액상 밀도 대시보드")]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 상태 블롭 파일 경로
    #[arg(long, default_value = "dashboard_state.json")]
    state_file: PathBuf,
    /// 언어팩 디렉터리 (key = "value" 형식의 TOML)
    #[arg(long)]
    lang_pack: Option<String>,
}

/// 프로그램의 엔트리 포인트. 상태를 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let lang = i18n::resolve_language(&cli.lang);
    let tr = i18n::Translator::new_with_pack(&lang, cli.lang_pack.as_deref());
    let mut dash = Dashboard::load(FileStorage::new(cli.state_file));
    app::run(&mut dash, &tr)?;
    Ok(())
}
