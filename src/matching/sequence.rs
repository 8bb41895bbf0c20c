//! 시퀀스 유사도 (Ratcliff/Obershelp 매칭 블록 방식)
//!
//! 가장 긴 공통 연속 구간을 찾고, 그 왼쪽과 오른쪽 구간에서
//! 같은 과정을 반복해 일치 문자 수 M을 구합니다.
//! 유사도 = 2·M / (len(a) + len(b))

use std::collections::HashMap;

/// 두 번째 시퀀스가 이 길이 이상이면 흔한 문자를 색인에서 제외
const AUTOJUNK_MIN_LEN: usize = 200;

/// 두 번째 시퀀스(b)의 문자 위치 색인을 만들어 두고 매칭 블록을 찾는 매처
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// b의 문자 → 등장 위치 (오름차순)
    b2j: HashMap<char, Vec<usize>>,
}

/// 일치 구간: a[a_start..a_start+size] == b[b_start..b_start+size]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = Self::index_b(&b);
        Self { a, b, b2j }
    }

    /// b 색인 생성
    /// 길이 200 이상이면 1% + 1회를 넘게 등장하는 문자를 색인에서 제외
    fn index_b(b: &[char]) -> HashMap<char, Vec<usize>> {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let limit = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        b2j
    }

    /// a[alo..ahi], b[blo..bhi] 범위에서 가장 긴 일치 구간
    /// 길이가 같으면 a에서 먼저, 그다음 b에서 먼저 나오는 구간
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = a[..i]와 b[..=j]에서 j로 끝나는 일치 길이
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j.checked_sub(1).and_then(|prev| j2len.get(&prev)).copied().unwrap_or(0) + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // 색인에서 빠진 흔한 문자로 양 끝을 확장
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// 모든 일치 구간 (a 위치 순)
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a_start && blo < block.b_start {
                queue.push((alo, block.a_start, blo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < ahi && b_end < bhi {
                queue.push((a_end, ahi, b_end, bhi));
            }
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }

    /// 유사도 [0, 1]
    /// 두 시퀀스가 모두 비어 있으면 1.0
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matches as f64 / total as f64
    }
}

/// 두 문자열의 유사도
///
/// # Examples
/// ```
/// use naeilum::matching::sequence::similarity_ratio;
/// assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
