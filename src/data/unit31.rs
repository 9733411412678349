//! Built-in tables for Unit 31, "O Rakat" (movement and direction).

use crate::models::{QuizItem, Sentence, VocabCard};

pub const TITLE: &str = "Unit 31: O Rakat";
pub const SUBTITLE: &str = "移動與方向";

pub static VOCABULARY: [VocabCard; 18] = [
    card("Romakat", "走 (正在走)", "🚶", "Row 482", "Rakat + om"),
    card("Comikay", "跑 (正在跑)", "🏃", "Row 983", "Cikay + om"),
    card("Minokay", "回家 / 回去", "🏠", "Row 525", "Mi + Nokay"),
    card("Tatayra", "將去 / 要去", "🔜", "Row 340", "Ta-Tayra (未來)"),
    card("Pasicowa", "朝向哪裡", "🧭", "Row 731", "Pasi-Cowa"),
    card("Pasitimol", "朝向南方", "⬇️", "Row 731", "Pasi-Timol"),
    card("Pakacowa", "經由哪裡", "🛤️", "Row 726", "Paka-Cowa"),
    card("Kicowa", "從哪裡 / 置於哪", "📍", "Row 725", "Ki-Cowa"),
    card("To'eman", "天黑 / 黑暗", "🌑", "Row 525", "State"),
    card("Korakorsa", "就慢跑", "🏃‍♂️", "User Fix", "Adverb"),
    card("Dimata'", "挑 / 扛 (詞根)", "🏋️", "User Fix", "Root"),
    card("Misahalifet", "比賽 / 使勁", "🏁", "Row 983", "Misa-Ha-Lifet"),
    card("Fafaed", "上面 / 表面", "⬆️", "Row 734", "Locative"),
    card("Tala", "前往 / 達到", "👉", "Row 734", "Direction"),
    card("Rakat", "走 / 路程 (詞根)", "👣", "Root", "Root"),
    card("Cikay", "跑 (詞根)", "👟", "Root", "Root"),
    card("Nokay", "回家 (詞根)", "🔙", "Root", "Root"),
    card("Lifet", "測驗 / 勝負 (詞根)", "⚖️", "Root", "Root"),
];

pub static SENTENCES: [Sentence; 9] = [
    sentence("Mingataay ciira takowanan a romakat.", "他正往我這邊走來。", "🚶", "Row 482"),
    sentence("Misahalifet kami a comikay i cairaan.", "我們使勁地跟他們賽跑。", "🏃", "Row 983"),
    sentence(
        "To'emanto ko romi'ad, korakorsa a minokay.",
        "天黑了，就慢跑回家。",
        "🌑",
        "Row 525 (Trans. Updated)",
    ),
    sentence("O tatayra kita i Taypak.", "我們將去台北。", "🚅", "Row 340"),
    sentence(
        "Pasicowaen koni a fawahan? Pasitimolen.",
        "這道門要朝向哪裡？要朝向南邊。",
        "🚪",
        "Row 731",
    ),
    sentence("Pakacowa ko kapah no niyaro' a minokay?", "部落的年輕人經由哪裡回家？", "🛤️", "Row 726"),
    sentence("Midimata' ca ina to kakaenen.", "媽媽他們挑著食物。", "🍱", "Row 447"),
    sentence("Talacowa kita i fafaed no riyar?", "我們在海上要去哪裡？", "🌊", "Row 734"),
    sentence("Kicowaen no mita a mi'araw?", "大家要從哪裡看？", "👀", "Row 725"),
];

const fn card(
    amis: &'static str,
    chinese: &'static str,
    icon: &'static str,
    source: &'static str,
    morph: &'static str,
) -> VocabCard {
    VocabCard {
        amis,
        chinese,
        icon,
        source,
        morph,
    }
}

const fn sentence(
    amis: &'static str,
    chinese: &'static str,
    icon: &'static str,
    source: &'static str,
) -> Sentence {
    Sentence {
        amis,
        chinese,
        icon,
        source,
    }
}

/// The six quiz questions shipped with the unit.
pub fn quiz_items() -> Vec<QuizItem> {
    vec![
        item(
            "To'emanto ko romi'ad, korakorsa a...",
            "To'emanto ko romi'ad, korakorsa a",
            &["Minokay (回家)", "Comikay (跑)", "Romakat (走)"],
            "Minokay (回家)",
            "Row 525: 天黑了就慢跑回家",
        ),
        item(
            "單字測驗：Korakorsa",
            "Korakorsa",
            &["就慢跑", "就睡覺", "就吃飯"],
            "就慢跑",
            "User Fix: Korakorsa",
        ),
        item(
            "單字測驗：Dimata'",
            "Dimata'",
            &["挑/扛 (詞根)", "推 (詞根)", "拉 (詞根)"],
            "挑/扛 (詞根)",
            "用肩膀做的事",
        ),
        item(
            "Pasicowaen koni a fawahan?",
            "Pasicowaen koni a fawahan",
            &["這道門要朝向哪裡？", "這道門要開嗎？", "這是誰的門？"],
            "這道門要朝向哪裡？",
            "Pasi-cowa (朝向哪裡)",
        ),
        item(
            "單字測驗：Comikay",
            "Comikay",
            &["跑 (正在跑)", "走 (正在走)", "飛 (正在飛)"],
            "跑 (正在跑)",
            "詞根 Cikay (跑) + om",
        ),
        item(
            "單字測驗：Pakacowa",
            "Pakacowa",
            &["經由哪裡", "朝向哪裡", "從哪裡"],
            "經由哪裡",
            "Paka- (經由/路過)",
        ),
    ]
}

fn item(prompt: &str, audio: &str, options: &[&str], answer: &str, hint: &str) -> QuizItem {
    QuizItem::new(
        prompt,
        audio,
        options.iter().map(|o| o.to_string()).collect(),
        answer,
        hint,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::quiz::{DEFAULT_SESSION_SIZE, QuestionPool};

    #[test]
    fn test_builtin_pool_is_valid() {
        let pool = QuestionPool::new(quiz_items()).unwrap();
        assert_eq!(pool.len(), 6);
        assert!(pool.len() >= DEFAULT_SESSION_SIZE);
    }

    #[test]
    fn test_every_builtin_question_has_audio() {
        assert!(quiz_items().iter().all(QuizItem::has_audio));
    }

    #[test]
    fn test_vocabulary_words_are_unique() {
        let words: HashSet<_> = VOCABULARY.iter().map(|c| c.amis).collect();
        assert_eq!(words.len(), VOCABULARY.len());
    }
}
