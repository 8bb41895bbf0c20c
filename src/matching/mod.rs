//! 영문 이름 → 한글 이름 추천
//!
//! 2단계로 동작합니다:
//!
//! 1. **점수 계산** (`scorer`): 항목의 로마자 표기 후보와 입력 이름의
//!    시퀀스 유사도(`sequence`)에 가산점/감점을 적용
//! 2. **선택** (`selection`): 점수 순으로 정렬한 뒤 initial/category가
//!    겹치지 않게 5개를 고르고, 모자라면 무작위로 보충
//!
//! # 사용 예시
//!
//! ```
//! use naeilum::{select_korean_names, Gender, NameCatalog, NameEntry};
//!
//! let catalog = NameCatalog::new(
//!     vec![NameEntry::new("지훈").with_romanization(["Jihun"]).with_initial("J")],
//!     vec![],
//! );
//! let names = select_korean_names(&catalog, "Jayden", Gender::Male);
//! assert_eq!(names[0].name, "지훈");
//! assert!(select_korean_names(&catalog, "Jayden", Gender::Female).is_empty());
//! ```

pub mod scorer;
pub mod selection;
pub mod sequence;

pub use scorer::{candidate_romanizations, compute_similarity_score};
pub use selection::{select_korean_names, select_names_with_rng, MAX_RECOMMENDATIONS};
pub use sequence::{similarity_ratio, SequenceMatcher};
