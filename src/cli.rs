//! 명령행 인자 정의

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "naeilum")]
#[command(about = "Recommends Korean names for a Latin-alphabet name and shows a daily fortune", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 이름/운세 JSON 디렉토리 (설정 파일 값보다 우선)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 한글 이름 추천
    Recommend {
        /// 영문 이름
        name: String,

        /// 성별 (male/female, 그 외 값은 male)
        #[arg(short, long)]
        gender: Option<String>,
    },

    /// 이전 추천 결과에서 하나를 골라 오늘의 운세 출력
    Select {
        /// 추천 목록에서의 위치 (0부터)
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// `recommend` 출력 JSON 파일 (`-`이면 표준 입력)
        #[arg(long, default_value = "-")]
        from: PathBuf,
    },

    /// 한글 이름의 운세
    Fortune {
        /// 한글 이름
        korean_name: String,

        /// 날짜 (YYYY-MM-DD, 기본값 오늘)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// 한글을 로마자로 변환
    Romanize {
        text: String,
    },

    /// 현재 설정 출력 (--save이면 설정 파일에 저장)
    Config {
        #[arg(long)]
        save: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from(["naeilum", "recommend", "Wilson Smith", "-g", "female"]).unwrap();
        match cli.command {
            Commands::Recommend { name, gender } => {
                assert_eq!(name, "Wilson Smith");
                assert_eq!(gender.as_deref(), Some("female"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_select_with_global_flags() {
        let cli = Cli::try_parse_from(["naeilum", "select", "-1", "--data-dir", "names", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("names")));
        match cli.command {
            Commands::Select { index, from } => {
                assert_eq!(index, -1);
                assert_eq!(from, PathBuf::from("-"));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["naeilum", "select", "2", "--from", "recs.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Select { index: 2, ref from } if from == &PathBuf::from("recs.json")));
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["naeilum", "config", "--save"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { save: true }));
        let cli = Cli::try_parse_from(["naeilum", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { save: false }));
    }

    #[test]
    fn test_parse_fortune() {
        let cli = Cli::try_parse_from(["naeilum", "fortune", "지훈", "--date", "2024-01-01"]).unwrap();
        match cli.command {
            Commands::Fortune { korean_name, date } => {
                assert_eq!(korean_name, "지훈");
                assert_eq!(date.as_deref(), Some("2024-01-01"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
