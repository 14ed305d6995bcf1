//! Static Hepburn syllable table (§4.2.1).
//!
//! Two-scalar keys (yōon) are checked before one-scalar keys by the caller;
//! this module only exposes the two lookup arities.

/// Look up a two-scalar yōon key, e.g. `"しゃ"` -> `"SHA"`.
pub fn two_scalar(kana: &str) -> Option<&'static str> {
    Some(match kana {
        "しゃ" => "SHA", "しゅ" => "SHU", "しょ" => "SHO",
        "じゃ" => "JA", "じゅ" => "JU", "じょ" => "JO",
        "ちゃ" => "CHA", "ちゅ" => "CHU", "ちょ" => "CHO",
        "ぢゃ" => "JA", "ぢゅ" => "JU", "ぢょ" => "JO",
        "きゃ" => "KYA", "きゅ" => "KYU", "きょ" => "KYO",
        "ぎゃ" => "GYA", "ぎゅ" => "GYU", "ぎょ" => "GYO",
        "にゃ" => "NYA", "にゅ" => "NYU", "にょ" => "NYO",
        "ひゃ" => "HYA", "ひゅ" => "HYU", "ひょ" => "HYO",
        "びゃ" => "BYA", "びゅ" => "BYU", "びょ" => "BYO",
        "ぴゃ" => "PYA", "ぴゅ" => "PYU", "ぴょ" => "PYO",
        "みゃ" => "MYA", "みゅ" => "MYU", "みょ" => "MYO",
        "りゃ" => "RYA", "りゅ" => "RYU", "りょ" => "RYO",
        _ => return None,
    })
}

/// Look up a one-scalar gojūon/voiced/historical key, e.g. `'し'` -> `"SHI"`.
pub fn one_scalar(kana: char) -> Option<&'static str> {
    Some(match kana {
        'あ' => "A", 'い' => "I", 'う' => "U", 'え' => "E", 'お' => "O",
        'か' => "KA", 'き' => "KI", 'く' => "KU", 'け' => "KE", 'こ' => "KO",
        'が' => "GA", 'ぎ' => "GI", 'ぐ' => "GU", 'げ' => "GE", 'ご' => "GO",
        'さ' => "SA", 'し' => "SHI", 'す' => "SU", 'せ' => "SE", 'そ' => "SO",
        'ざ' => "ZA", 'じ' => "JI", 'ず' => "ZU", 'ぜ' => "ZE", 'ぞ' => "ZO",
        'た' => "TA", 'ち' => "CHI", 'つ' => "TSU", 'て' => "TE", 'と' => "TO",
        'だ' => "DA", 'ぢ' => "JI", 'づ' => "ZU", 'で' => "DE", 'ど' => "DO",
        'な' => "NA", 'に' => "NI", 'ぬ' => "NU", 'ね' => "NE", 'の' => "NO",
        'は' => "HA", 'ひ' => "HI", 'ふ' => "FU", 'へ' => "HE", 'ほ' => "HO",
        'ば' => "BA", 'び' => "BI", 'ぶ' => "BU", 'べ' => "BE", 'ぼ' => "BO",
        'ぱ' => "PA", 'ぴ' => "PI", 'ぷ' => "PU", 'ぺ' => "PE", 'ぽ' => "PO",
        'ま' => "MA", 'み' => "MI", 'む' => "MU", 'め' => "ME", 'も' => "MO",
        'や' => "YA", 'ゆ' => "YU", 'よ' => "YO",
        'ら' => "RA", 'り' => "RI", 'る' => "RU", 'れ' => "RE", 'ろ' => "RO",
        'わ' => "WA", 'ゐ' => "I", 'ゑ' => "E", 'を' => "O",
        'ん' => "N",
        _ => return None,
    })
}
