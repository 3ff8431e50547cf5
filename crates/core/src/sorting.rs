use std::cmp::Ordering;

use crate::domain::Frame;

/// Sort orders for the frames of a roll.
///
/// Frames whose sort key is absent or unparsable (a missing date, a `B`
/// shutter token) order after all frames with a usable key; ties fall back
/// to the frame count, so every order is total and deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameSort {
    #[default]
    Count,
    Date,
    Aperture,
    ShutterSpeed,
}

pub fn sort_frames(frames: &mut [Frame], sort: FrameSort) {
    match sort {
        FrameSort::Count => frames.sort_by(|a, b| a.count.cmp(&b.count)),
        FrameSort::Date => frames.sort_by(|a, b| {
            option_order(a.date, b.date, |x, y| x.cmp(&y)).then(a.count.cmp(&b.count))
        }),
        FrameSort::Aperture => frames.sort_by(|a, b| {
            let a_stop = a.aperture.as_deref().and_then(aperture_stop);
            let b_stop = b.aperture.as_deref().and_then(aperture_stop);
            option_order(a_stop, b_stop, |x, y| x.total_cmp(&y)).then(a.count.cmp(&b.count))
        }),
        FrameSort::ShutterSpeed => frames.sort_by(|a, b| {
            let a_secs = a.shutter_speed.as_deref().and_then(shutter_seconds);
            let b_secs = b.shutter_speed.as_deref().and_then(shutter_seconds);
            option_order(a_secs, b_secs, |x, y| x.total_cmp(&y)).then(a.count.cmp(&b.count))
        }),
    }
}

/// Exposure duration of a shutter speed token in seconds.
/// `1/125` → 0.008, `30"` → 30.0. Returns `None` for `B` and anything else
/// that carries no duration.
pub fn shutter_seconds(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() || token == "B" {
        return None;
    }
    if let Some((num, den)) = token.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        if den == 0.0 {
            return None;
        }
        return Some(num / den);
    }
    token.trim_end_matches('"').parse().ok()
}

/// Numeric f-number of an aperture token. Returns `None` for anything that
/// does not parse as a positive number.
pub fn aperture_stop(token: &str) -> Option<f64> {
    let stop: f64 = token.trim().parse().ok()?;
    if stop > 0.0 {
        Some(stop)
    } else {
        None
    }
}

fn option_order<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: Fn(T, T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_datetime;

    fn frame(count: i64) -> Frame {
        Frame {
            id: count,
            roll_id: 1,
            count,
            date: None,
            lens_id: None,
            shutter_speed: None,
            aperture: None,
            note: None,
            location: None,
            formatted_address: None,
        }
    }

    #[test]
    fn test_shutter_seconds() {
        assert_eq!(shutter_seconds("1/125"), Some(1.0 / 125.0));
        assert_eq!(shutter_seconds("1/2"), Some(0.5));
        assert_eq!(shutter_seconds("30\""), Some(30.0));
        assert_eq!(shutter_seconds("1.6\""), Some(1.6));
        assert_eq!(shutter_seconds("B"), None);
        assert_eq!(shutter_seconds(""), None);
        assert_eq!(shutter_seconds("1/0"), None);
        assert_eq!(shutter_seconds("fast"), None);
    }

    #[test]
    fn test_aperture_stop() {
        assert_eq!(aperture_stop("5.6"), Some(5.6));
        assert_eq!(aperture_stop("8"), Some(8.0));
        assert_eq!(aperture_stop("-1"), None);
        assert_eq!(aperture_stop("wide"), None);
    }

    #[test]
    fn test_sort_by_count() {
        let mut frames = vec![frame(3), frame(1), frame(2)];
        sort_frames(&mut frames, FrameSort::Count);
        let counts: Vec<i64> = frames.iter().map(|f| f.count).collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_date_unparsable_last() {
        let mut dated = frame(1);
        dated.date = Some(parse_datetime("2024-05-14 10:00").unwrap());
        let mut later = frame(2);
        later.date = Some(parse_datetime("2024-05-14 18:00").unwrap());
        let undated = frame(3);

        let mut frames = vec![undated.clone(), later.clone(), dated.clone()];
        sort_frames(&mut frames, FrameSort::Date);
        let ids: Vec<i64> = frames.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![dated.id, later.id, undated.id]);
    }

    #[test]
    fn test_sort_by_aperture_widest_first() {
        let mut wide = frame(1);
        wide.aperture = Some("1.8".to_string());
        let mut narrow = frame(2);
        narrow.aperture = Some("16".to_string());
        let blank = frame(3);

        let mut frames = vec![narrow.clone(), blank.clone(), wide.clone()];
        sort_frames(&mut frames, FrameSort::Aperture);
        let ids: Vec<i64> = frames.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![wide.id, narrow.id, blank.id]);
    }

    #[test]
    fn test_sort_by_shutter_fastest_first() {
        let mut fast = frame(1);
        fast.shutter_speed = Some("1/1000".to_string());
        let mut slow = frame(2);
        slow.shutter_speed = Some("2\"".to_string());
        let mut bulb = frame(3);
        bulb.shutter_speed = Some("B".to_string());

        let mut frames = vec![slow.clone(), bulb.clone(), fast.clone()];
        sort_frames(&mut frames, FrameSort::ShutterSpeed);
        let ids: Vec<i64> = frames.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![fast.id, slow.id, bulb.id]);
    }

    #[test]
    fn test_missing_keys_tie_break_by_count() {
        let mut frames = vec![frame(9), frame(4), frame(6)];
        sort_frames(&mut frames, FrameSort::Aperture);
        let counts: Vec<i64> = frames.iter().map(|f| f.count).collect();
        assert_eq!(counts, vec![4, 6, 9]);
    }

    #[test]
    fn test_sort_is_deterministic_for_equal_keys() {
        let mut a = frame(2);
        a.shutter_speed = Some("1/125".to_string());
        let mut b = frame(1);
        b.shutter_speed = Some("1/125".to_string());

        let mut frames = vec![a, b];
        sort_frames(&mut frames, FrameSort::ShutterSpeed);
        let counts: Vec<i64> = frames.iter().map(|f| f.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }
}
