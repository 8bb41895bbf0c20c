//! Naeilum - 영문 이름에 어울리는 한글 이름 추천

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use naeilum::cli::{Cli, Commands};
use naeilum::config::{config_path, load_config, save_config};
use naeilum::error::{ErrorPayload, NaeilumError};
use naeilum::service::Recommendation;
use naeilum::{romanize_korean_text, NaeilumService};
use serde::Serialize;

fn main() {
    let cli = Cli::parse();

    // 로깅 초기화 (기본 warn, -v이면 debug)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        log::debug!("요청 실패: {:?}", e);
        let payload = ErrorPayload::from(&e);
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{}", json),
            Err(_) => eprintln!("{}", e),
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), NaeilumError> {
    // 로마자 변환은 카탈로그가 필요 없음
    if let Commands::Romanize { text } = &cli.command {
        println!("{}", romanize_korean_text(text));
        return Ok(());
    }

    let mut config = load_config();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    if let Commands::Config { save } = cli.command {
        if save {
            let path = config_path();
            save_config(&config, &path)?;
            log::info!("설정 저장: {}", path.display());
        }
        return print_json(&config);
    }

    let service = NaeilumService::load(config);

    match cli.command {
        Commands::Recommend { name, gender } => {
            let gender = NaeilumService::validate_gender(gender.as_deref());
            print_json(&service.recommend(&name, gender)?)
        }
        Commands::Select { index, from } => {
            let recommendation = Recommendation::from_json(&read_input(&from)?)?;
            print_json(&service.select(&recommendation.names, index)?)
        }
        Commands::Fortune { korean_name, date } => print_json(&service.fortune_for(&korean_name, date.as_deref())?),
        Commands::Romanize { .. } | Commands::Config { .. } => Ok(()),
    }
}

/// 파일 또는 표준 입력(`-`) 전체 읽기
fn read_input(path: &Path) -> Result<String, NaeilumError> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), NaeilumError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
