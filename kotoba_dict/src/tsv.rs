//! 词典文本格式（TSV）：
//!
//! - `surface<TAB>reading<TAB>cost<TAB>lid<TAB>rid<TAB>attributes`
//! - cost/lid/rid/attributes 可省略或留空，默认 0 / 无属性
//! - attributes 为逗号分隔的属性名：`user`、`spelling_correction`、`best`、`no_variants`
//! - 允许 `#` 开头注释行与空行
use std::str::FromStr;

use kotoba_core::{Attributes, Entry, Error, Result};

/// 解析整份词典文本。
pub fn parse_lexicon(s: &str) -> Result<Vec<Entry>> {
    let mut out = Vec::new();
    for (idx, line) in s.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        out.push(parse_line(line, idx + 1)?);
    }
    Ok(out)
}

fn parse_line(line: &str, line_no: usize) -> Result<Entry> {
    let err = |message: String| Error::Parse {
        line: line_no,
        message,
    };
    let mut it = line.split('\t').map(str::trim);
    let surface = it.next().unwrap_or("");
    let reading = it.next().unwrap_or("");
    if surface.is_empty() || reading.is_empty() {
        return Err(err("缺少 surface/reading".to_string()));
    }
    let cost: i32 = parse_number(it.next(), "cost").map_err(err)?;
    let lid: u16 = parse_number(it.next(), "lid").map_err(err)?;
    let rid: u16 = parse_number(it.next(), "rid").map_err(err)?;
    let attributes = parse_attributes(it.next().unwrap_or("")).map_err(err)?;

    Ok(Entry::new(reading, surface)
        .cost(cost)
        .context_ids(lid, rid)
        .attributes(attributes))
}

fn parse_number<T: FromStr + Default>(field: Option<&str>, name: &str) -> std::result::Result<T, String> {
    match field.filter(|x| !x.is_empty()) {
        None => Ok(T::default()),
        Some(x) => x.parse().map_err(|_| format!("{name} 不是合法数字：{x:?}")),
    }
}

fn parse_attributes(field: &str) -> std::result::Result<Attributes, String> {
    let mut attrs = Attributes::empty();
    for name in field.split(',').map(str::trim).filter(|x| !x.is_empty()) {
        attrs |= match name {
            "user" => Attributes::USER_DICTIONARY,
            "spelling_correction" => Attributes::SPELLING_CORRECTION,
            "best" => Attributes::BEST_CANDIDATE,
            "no_variants" => Attributes::NO_VARIANTS_EXPANSION,
            other => return Err(format!("未知属性：{other:?}")),
        };
    }
    Ok(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_lines() {
        let text = "# comment\n\n今日\tきょう\t3000\t12\t34\tbest,user\n木\tき\n";
        let entries = parse_lexicon(text).unwrap();
        assert_eq!(entries.len(), 2);

        let e = &entries[0];
        assert_eq!((e.reading.as_str(), e.surface.as_str()), ("きょう", "今日"));
        assert_eq!((e.cost, e.lid, e.rid), (3000, 12, 34));
        assert_eq!(e.attributes, Attributes::BEST_CANDIDATE | Attributes::USER_DICTIONARY);

        let e = &entries[1];
        assert_eq!((e.cost, e.lid, e.rid), (0, 0, 0));
        assert!(e.attributes.is_empty());
    }

    #[test]
    fn empty_numeric_fields_default_to_zero() {
        let entries = parse_lexicon("空\tそら\t\t\t7\n").unwrap();
        assert_eq!((entries[0].cost, entries[0].lid, entries[0].rid), (0, 0, 7));
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_lexicon("木\tき\n花\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = parse_lexicon("木\tき\tabc\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_lexicon("木\tき\t0\t0\t0\tbogus\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
