//! 통합 테스트 - 공개 API와 기본 데이터 파일

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use naeilum::catalog::load_fortunes;
use naeilum::config::NaeilumConfig;
use naeilum::core::unicode::{syllable_at, SYLLABLE_COUNT};
use naeilum::matching::select_names_with_rng;
use naeilum::{
    compute_similarity_score, daily_fortune, normalize_name, normalize_romanization, romanize_korean_text,
    select_korean_names, Gender, NaeilumService, NameCatalog, NameEntry,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn catalog() -> NameCatalog {
    NameCatalog::load(&data_dir())
}

fn names(selected: &[&NameEntry]) -> Vec<String> {
    selected.iter().map(|entry| entry.name.clone()).collect()
}

#[test]
fn test_romanization_is_total() {
    for offset in 0..SYLLABLE_COUNT {
        let c = syllable_at(offset).unwrap();
        let roman = romanize_korean_text(&c.to_string());
        assert!(!roman.is_empty());
        assert_eq!(roman, romanize_korean_text(&c.to_string()));
    }
}

#[test]
fn test_romanize_names() {
    assert_eq!(romanize_korean_text("지훈"), "jihun");
    assert_eq!(romanize_korean_text("서윤"), "seoyun");
    assert_eq!(romanize_korean_text("원석"), "wonseok");
    assert_eq!(romanize_korean_text("Kim 민준"), "Kim minjun");
}

#[test]
fn test_normalizers_idempotent() {
    for s in ["Wilson Smith", "José-María 2nd", "ÆØÅ", "지훈", "  ", "O'Connor"] {
        assert_eq!(normalize_name(&normalize_name(s)), normalize_name(s));
        assert_eq!(
            normalize_romanization(&normalize_romanization(s)),
            normalize_romanization(s)
        );
        assert_eq!(normalize_name(&s.to_uppercase()), normalize_name(&s.to_lowercase()));
    }
}

#[test]
fn test_identical_romanization_scores_at_least_one() {
    let entry = NameEntry::new("지훈").with_romanization(["Jihun", "Ji-hoon"]);
    assert!(compute_similarity_score("Jihun", &entry) >= 1.0);
    assert!(compute_similarity_score("Ji Hoon", &entry) >= 1.0);
    assert_eq!(compute_similarity_score("", &entry), 0.0);
}

#[test]
fn test_default_data_loads() {
    let catalog = catalog();
    assert_eq!(catalog.male.len(), 12);
    assert_eq!(catalog.female.len(), 12);
    assert_eq!(load_fortunes(&data_dir()).len(), 5);
}

#[test]
fn test_never_duplicates_never_more_than_five() {
    let catalog = catalog();
    let inputs = ["Jihoon", "Sophia", "Xavier", "Wilson Smith", "Anna", "Zz", "Mary-Jane"];
    for gender in [Gender::Male, Gender::Female] {
        for input in inputs {
            for _ in 0..10 {
                let selected = select_korean_names(&catalog, input, gender);
                assert!(selected.len() <= 5);
                let unique: HashSet<String> = names(&selected).into_iter().collect();
                assert_eq!(unique.len(), selected.len(), "{} {}", input, gender);
            }
        }
    }
}

#[test]
fn test_wilson_smith_special_match() {
    let catalog = catalog();
    let selected = select_korean_names(&catalog, "Wilson Smith", Gender::Male);
    assert_eq!(selected[0].name, "원석");
    assert_eq!(selected.len(), 5);
    assert!(selected[1..].iter().all(|entry| entry.name != "원석"));

    // 특수 항목은 다른 입력에서 맨 앞에 오지 않음
    let selected = select_korean_names(&catalog, "Wonseok", Gender::Male);
    assert_ne!(selected[0].name, "원석");
}

#[test]
fn test_small_catalog_returns_everything() {
    let catalog = NameCatalog::new(
        vec![
            NameEntry::new("지훈").with_initial("J").with_category("Honor"),
            NameEntry::new("민준").with_initial("M").with_category("Wisdom"),
        ],
        vec![],
    );
    let selected = select_korean_names(&catalog, "Qwxyz", Gender::Male);
    assert_eq!(selected.len(), 2);
}

#[test]
fn test_diversity_of_first_picks() {
    let catalog = catalog();
    for seed in 0..20 {
        let selected = select_names_with_rng(&catalog.male, "Xavier", &mut StdRng::seed_from_u64(seed));
        assert_eq!(selected.len(), 5);

        let initials: HashSet<&str> = selected[..3].iter().map(|entry| entry.initial.as_str()).collect();
        assert_eq!(initials.len(), 3);

        for k in 3..5 {
            let earlier: HashSet<&str> = selected[..k].iter().map(|entry| entry.category.as_str()).collect();
            assert!(!earlier.contains(selected[k].category.as_str()));
        }
    }
}

#[test]
fn test_ranking_on_default_data() {
    let catalog = catalog();

    let selected = names(&select_korean_names(&catalog, "Jihoon", Gender::Male));
    assert_eq!(selected[0], "지훈");
    let second_third: HashSet<&str> = selected[1..3].iter().map(String::as_str).collect();
    assert_eq!(second_third, HashSet::from(["하준", "예준"]));
    assert_eq!(selected[3], "주원");
    assert!(selected[4] == "서준" || selected[4] == "민준");

    // 소율, 서윤은 initial S 중복으로 건너뜀
    let selected = names(&select_korean_names(&catalog, "Sophia", Gender::Female));
    assert_eq!(&selected[..2], &["수아".to_string(), "지아".to_string()]);
}

#[test]
fn test_daily_fortune_stable() {
    let fortunes = load_fortunes(&data_dir());
    let day1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let first = daily_fortune(&fortunes, "지훈", day1);
    let second = daily_fortune(&fortunes, "지훈", day1);
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);

    let categories: Vec<&str> = first.iter().map(|f| f.category.as_str()).collect();
    assert_eq!(categories, vec!["Love", "Career", "Wealth", "Health", "Wisdom"]);
}

#[test]
fn test_service_end_to_end() {
    let config = NaeilumConfig {
        data_dir: data_dir(),
        ..NaeilumConfig::default()
    };
    let service = NaeilumService::load(config);

    let gender = NaeilumService::validate_gender(Some("unknown"));
    let recommendation = service.recommend("  Jihoon ", gender).unwrap();
    assert_eq!(recommendation.names[0].name, "지훈");

    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let selection = service.select_on(&recommendation.names, 0, date).unwrap();
    assert_eq!(selection.name.name, "지훈");
    assert_eq!(selection.fortune.len(), 5);

    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["name"]["hanja"], "志勳");
    assert!(json["fortune"][0]["message_ko"].is_string());

    assert_eq!(service.recommend("", Gender::Male).unwrap_err().code(), "NAME_REQUIRED");
    assert_eq!(
        service.select_on(&recommendation.names, 9, date).unwrap_err().code(),
        "INVALID_SELECTION"
    );
}
