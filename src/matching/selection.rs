//! 추천 이름 선택
//!
//! 처리 순서:
//! 1. 특수 매칭: 정규화한 입력과 `special_match`가 같은 첫 항목
//! 2. 점수 계산: 나머지 일반 항목마다 유사도 점수 + 무작위 동점 처리값
//! 3. 다양성 선택: 앞의 3개는 `initial`이 겹치지 않게,
//!    그 뒤로는 `category`가 겹치지 않게 점수 순으로 고름
//! 4. 보충: 5개가 안 되면 남은 항목을 섞어서 채움
//!
//! 한 결과 안에서 같은 `name`은 두 번 나오지 않습니다.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{Gender, NameCatalog, NameEntry};
use crate::core::normalize::normalize_name;

use super::scorer::compute_similarity_score;

/// 추천 개수
pub const MAX_RECOMMENDATIONS: usize = 5;
/// 이 개수에 이를 때까지는 `initial` 중복을 피함 (이후에는 `category` 중복을 피함)
pub const DISTINCT_INITIAL_PICKS: usize = 3;

/// 점수가 매겨진 후보 (선택 한 번 동안만 존재)
#[derive(Debug, Clone, Copy)]
struct ScoredCandidate {
    index: usize,
    score: f64,
    tie_break: f64,
}

/// 성별 카탈로그에서 추천 이름 선택
///
/// 무작위 값은 호출마다 새로 만든 생성기에서 뽑습니다.
pub fn select_korean_names<'a>(catalog: &'a NameCatalog, original_name: &str, gender: Gender) -> Vec<&'a NameEntry> {
    let mut rng = StdRng::from_entropy();
    select_names_with_rng(catalog.names(gender), original_name, &mut rng)
}

/// 주어진 난수 생성기로 추천 이름 선택
pub fn select_names_with_rng<'a, R>(entries: &'a [NameEntry], original_name: &str, rng: &mut R) -> Vec<&'a NameEntry>
where
    R: Rng + ?Sized,
{
    if entries.is_empty() {
        return Vec::new();
    }

    let mut selected: Vec<usize> = Vec::with_capacity(MAX_RECOMMENDATIONS);
    let mut seen_names: HashSet<&str> = HashSet::new();

    // 1. 특수 매칭 (최대 1개)
    let normalized_input = normalize_name(original_name);
    let special = entries.iter().position(|entry| {
        entry
            .special_match
            .as_deref()
            .is_some_and(|special| !special.is_empty() && normalize_name(special) == normalized_input)
    });
    if let Some(index) = special {
        log::debug!("특수 매칭: {} -> {}", original_name, entries[index].name);
        selected.push(index);
        if !entries[index].name.is_empty() {
            seen_names.insert(entries[index].name.as_str());
        }
    }

    // 2. 점수 계산
    let mut scored: Vec<ScoredCandidate> = entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| !selected.contains(index) && !entry.is_special())
        .map(|(index, entry)| ScoredCandidate {
            index,
            score: compute_similarity_score(original_name, entry),
            tie_break: rng.gen::<f64>(),
        })
        .collect();

    // 점수 내림차순, 동점이면 무작위 값 오름차순
    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.tie_break.total_cmp(&b.tie_break)));

    // 3. 다양성 선택
    let mut seen_initials: HashSet<&str> = HashSet::new();
    let mut seen_categories: HashSet<&str> = HashSet::new();

    for candidate in &scored {
        if selected.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        let entry = &entries[candidate.index];
        let name = entry.name.as_str();
        let initial = entry.initial.as_str();
        let category = entry.category.as_str();

        if seen_names.contains(name) {
            continue;
        }
        if selected.len() < DISTINCT_INITIAL_PICKS && seen_initials.contains(initial) {
            continue;
        }
        if selected.len() >= DISTINCT_INITIAL_PICKS && seen_categories.contains(category) {
            continue;
        }

        selected.push(candidate.index);
        if !name.is_empty() {
            seen_names.insert(name);
        }
        if !initial.is_empty() {
            seen_initials.insert(initial);
        }
        if !category.is_empty() {
            seen_categories.insert(category);
        }
    }

    // 4. 보충
    if selected.len() < MAX_RECOMMENDATIONS {
        let mut leftovers: Vec<usize> = (0..entries.len())
            .filter(|index| !selected.contains(index) && !seen_names.contains(entries[*index].name.as_str()))
            .collect();
        leftovers.shuffle(rng);
        log::debug!("보충 후보 {}개 (현재 {}개 선택)", leftovers.len(), selected.len());

        for index in leftovers {
            if selected.len() >= MAX_RECOMMENDATIONS {
                break;
            }
            let name = entries[index].name.as_str();
            if seen_names.contains(name) {
                continue;
            }
            selected.push(index);
            if !name.is_empty() {
                seen_names.insert(name);
            }
        }
    }

    selected.into_iter().map(|index| &entries[index]).collect()
}
