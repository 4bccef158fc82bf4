use std::ops::Index;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the post name {}", num_str, date_str)),
    }
}

/// Parses a post name such as `2021-05-01-12-30`. Every group has a fixed
/// width, the clock is 24h and there is no timezone.
pub fn parse_name_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
            static ref NAME_REGEX : Regex = Regex::new(
                r"^([0-9]{4})-([0-9]{2})-([0-9]{2})-([0-9]{2})-([0-9]{2})$"
            ).unwrap();
        }

    let Some(caps) = NAME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse post name {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = to_u32(caps.index(4))?;
    let mn: u32 = to_u32(caps.index(5))?;

    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return Err(format!("Invalid date in post name {}", buf));
    };
    let Some(time) = NaiveTime::from_hms_opt(h, mn, 0) else {
        return Err(format!("Invalid time in post name {}", buf));
    };

    Ok(NaiveDateTime::new(date, time))
}

pub fn format_date_time(date_time: &NaiveDateTime) -> (String, String) {
    let date = date_time.format("%Y-%m-%d").to_string();
    let time = date_time.format("%H:%M").to_string();
    (date, time)
}

/// First `count` characters of `text`, never splitting a character.
pub fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
