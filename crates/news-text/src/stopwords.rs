//! Closed Korean stopword list.

/// Function words and particles that carry no topic signal.
pub const STOP_WORDS: &[&str] = &[
    // conjunctions, determiners, pronouns
    "그리고", "그러나", "하지만", "그런데", "또한", "또는", "및", "그", "이", "저", "것", "등",
    "수", "들", "이번", "지난", "이날", "우리", "그것", "이것", "저것", "때문", "위해", "통해",
    "대한", "관련", "경우", "기자", "뉴스",
    // copula and light verbs
    "이다", "있다", "없다", "않다", "하다", "되다", "했다", "됐다", "한다", "된다", "있는", "없는",
    "하는", "되는", "있어", "했다고", "밝혔다", "말했다", "할",
    // particles
    "를", "을", "은", "는", "가", "으로", "로", "에게", "에게서", "와", "과", "에서", "에서는",
    "으로는", "까지", "부터", "처럼", "보다", "라고", "이라고", "에는", "에도", "의", "에", "도",
    "만",
];

/// Check if a token is a stopword.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
