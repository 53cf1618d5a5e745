//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Shared helpers for generating styled test input.

#![allow(dead_code)]

use termionix_ansislice::find_escape_sequences;

/// Style name with its SGR open and close sequences.
pub struct Style {
    pub name: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

const fn style(name: &'static str, open: &'static str, close: &'static str) -> Style {
    Style { name, open, close }
}

/// Foreground, background and modifier styles used to decorate test text.
pub const STYLES: &[Style] = &[
    style("black", "\x1b[30m", "\x1b[39m"),
    style("red", "\x1b[31m", "\x1b[39m"),
    style("green", "\x1b[32m", "\x1b[39m"),
    style("yellow", "\x1b[33m", "\x1b[39m"),
    style("blue", "\x1b[34m", "\x1b[39m"),
    style("magenta", "\x1b[35m", "\x1b[39m"),
    style("cyan", "\x1b[36m", "\x1b[39m"),
    style("white", "\x1b[37m", "\x1b[39m"),
    style("gray", "\x1b[90m", "\x1b[39m"),
    style("blackBright", "\x1b[90m", "\x1b[39m"),
    style("redBright", "\x1b[91m", "\x1b[39m"),
    style("greenBright", "\x1b[92m", "\x1b[39m"),
    style("yellowBright", "\x1b[93m", "\x1b[39m"),
    style("blueBright", "\x1b[94m", "\x1b[39m"),
    style("magentaBright", "\x1b[95m", "\x1b[39m"),
    style("cyanBright", "\x1b[96m", "\x1b[39m"),
    style("whiteBright", "\x1b[97m", "\x1b[39m"),
    style("bgBlack", "\x1b[40m", "\x1b[49m"),
    style("bgRed", "\x1b[41m", "\x1b[49m"),
    style("bgGreen", "\x1b[42m", "\x1b[49m"),
    style("bgYellow", "\x1b[43m", "\x1b[49m"),
    style("bgBlue", "\x1b[44m", "\x1b[49m"),
    style("bgMagenta", "\x1b[45m", "\x1b[49m"),
    style("bgCyan", "\x1b[46m", "\x1b[49m"),
    style("bgWhite", "\x1b[47m", "\x1b[49m"),
    style("bgGray", "\x1b[100m", "\x1b[49m"),
    style("bgBlackBright", "\x1b[100m", "\x1b[49m"),
    style("bgRedBright", "\x1b[101m", "\x1b[49m"),
    style("bgGreenBright", "\x1b[102m", "\x1b[49m"),
    style("bgYellowBright", "\x1b[103m", "\x1b[49m"),
    style("bgBlueBright", "\x1b[104m", "\x1b[49m"),
    style("bgMagentaBright", "\x1b[105m", "\x1b[49m"),
    style("bgCyanBright", "\x1b[106m", "\x1b[49m"),
    style("bgWhiteBright", "\x1b[107m", "\x1b[49m"),
    style("reset", "\x1b[0m", "\x1b[0m"),
    style("bold", "\x1b[1m", "\x1b[22m"),
    style("dim", "\x1b[2m", "\x1b[22m"),
    style("italic", "\x1b[3m", "\x1b[23m"),
    style("underline", "\x1b[4m", "\x1b[24m"),
    style("inverse", "\x1b[7m", "\x1b[27m"),
    style("hidden", "\x1b[8m", "\x1b[28m"),
    style("strikethrough", "\x1b[9m", "\x1b[29m"),
];

/// Wraps each character of `text` in a style. The style of the character at
/// position `i` is `STYLES[picks[i % picks.len()] % STYLES.len()]`.
pub fn ansify(text: &str, picks: &[usize]) -> String {
    let mut ansified = String::with_capacity(text.len() * 12);
    for (i, ch) in text.chars().enumerate() {
        let pick = if picks.is_empty() { i } else { picks[i % picks.len()] };
        let style = &STYLES[pick % STYLES.len()];
        ansified.push_str(style.open);
        ansified.push(ch);
        ansified.push_str(style.close);
    }
    ansified
}

/// Substring over `char`s with negative index and clamping rules.
pub fn plain_slice(text: &str, start: i64, end: Option<i64>) -> String {
    let len = text.chars().count() as i64;
    let resolve = |index: i64| {
        if index < 0 {
            (len + index).max(0)
        } else {
            index.min(len)
        }
    };
    let from = resolve(start);
    let to = end.map_or(len, resolve);
    if from >= to {
        return String::new();
    }
    text.chars()
        .skip(from as usize)
        .take((to - from) as usize)
        .collect()
}

/// Escape sequences of `text`, in order.
pub fn escapes(text: &str) -> Vec<&str> {
    find_escape_sequences(text).map(|m| m.text).collect()
}

/// A fixed paragraph of prose for deterministic tests.
pub const PARAGRAPH: &str = "Ozu wiltaz fi bivzo irogu. Koz zuwfew ke hacgej wos \
    pes bepiv. Rebvi ewzeb loz ujalo wocne ze pemuwa. Nuhzo ruwut cuk tove \
    vuwibsu zohcegzu. Edoge ditac owe vag zu; fomeneta dik zibi nojub.";
