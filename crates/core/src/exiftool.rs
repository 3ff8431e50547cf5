use std::collections::HashMap;

use crate::domain::{Camera, Frame, Lens, Roll};
use crate::sorting::shutter_seconds;

/// Values applied to every frame of an export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub artist: Option<String>,
    pub copyright: Option<String>,
}

/// Build one exiftool invocation per frame, each terminated with `;` and a
/// blank line so the output can be pasted into a shell as-is.
///
/// Tags without a usable value are omitted: a frame with no lens gets no
/// lens tags, a `B` shutter token has no numeric exposure and is skipped.
pub fn build_commands(
    roll: &Roll,
    camera: Option<&Camera>,
    frames: &[Frame],
    lenses: &HashMap<i64, Lens>,
    opts: &ExportOptions,
) -> String {
    let stem = file_stem(&roll.name);
    let mut out = String::new();

    for frame in frames {
        let mut cmd = String::from("exiftool");

        if let Some(camera) = camera {
            push_tag(&mut cmd, "Make", &camera.make);
            push_tag(&mut cmd, "Model", &camera.model);
        }
        if let Some(lens) = frame.lens_id.and_then(|id| lenses.get(&id)) {
            push_tag(&mut cmd, "LensMake", &lens.make);
            push_tag(&mut cmd, "LensModel", &lens.model);
        }
        if let Some(date) = frame.date {
            push_tag(&mut cmd, "DateTime", &date.format("%Y:%m:%d %H:%M:%S").to_string());
        }
        if let Some(token) = frame.shutter_speed.as_deref() {
            if shutter_seconds(token).is_some() {
                cmd.push_str(&format!(
                    " -ShutterSpeedValue={}",
                    token.trim_end_matches('"')
                ));
            }
        }
        if let Some(aperture) = frame.aperture.as_deref() {
            cmd.push_str(&format!(" -ApertureValue={aperture}"));
        }
        if let Some(note) = frame.note.as_deref() {
            push_tag(&mut cmd, "UserComment", note);
        }
        if let Some(point) = frame.location {
            let lat_ref = if point.latitude < 0.0 { "S" } else { "N" };
            let lon_ref = if point.longitude < 0.0 { "W" } else { "E" };
            push_tag(&mut cmd, "GPSLatitude", &point.latitude.abs().to_string());
            cmd.push_str(&format!(" -GPSLatitudeRef={lat_ref}"));
            push_tag(&mut cmd, "GPSLongitude", &point.longitude.abs().to_string());
            cmd.push_str(&format!(" -GPSLongitudeRef={lon_ref}"));
        }
        if let Some(artist) = opts.artist.as_deref() {
            push_tag(&mut cmd, "Artist", artist);
        }
        if let Some(copyright) = opts.copyright.as_deref() {
            push_tag(&mut cmd, "Copyright", copyright);
        }

        cmd.push_str(&format!(" {};", quoted(&format!("{stem}_{:02}.jpg", frame.count))));
        out.push_str(&cmd);
        out.push_str("\n\n");
    }

    out
}

fn push_tag(cmd: &mut String, tag: &str, value: &str) {
    cmd.push_str(&format!(" -{tag}={}", quoted(value)));
}

/// Quote a value for shell consumption, escaping embedded double quotes.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Derive a filename stem from a roll name: alphanumerics kept lowercased,
/// everything else collapsed to single underscores.
fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            stem.extend(c.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            stem.push('_');
            last_was_sep = true;
        }
    }
    let stem = stem.trim_end_matches('_').to_string();
    if stem.is_empty() {
        "roll".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_datetime, GeoPoint};

    fn test_roll() -> Roll {
        Roll {
            id: 1,
            name: "Summer in Lisbon".to_string(),
            date: parse_datetime("2024-07-02 09:15").unwrap(),
            note: None,
            camera_id: Some(1),
            archived: false,
        }
    }

    fn test_camera() -> Camera {
        Camera {
            id: 1,
            make: "Canon".to_string(),
            model: "A-1".to_string(),
            serial_number: None,
        }
    }

    fn test_lens() -> Lens {
        Lens {
            id: 1,
            make: "Canon".to_string(),
            model: "FD 50mm".to_string(),
            serial_number: None,
            min_aperture: Some("22".to_string()),
            max_aperture: Some("1.8".to_string()),
            min_focal_length: 50,
            max_focal_length: 50,
        }
    }

    fn bare_frame(count: i64) -> Frame {
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
    fn test_full_frame_command() {
        let mut frame = bare_frame(12);
        frame.date = Some(parse_datetime("2024-07-02 15:42").unwrap());
        frame.lens_id = Some(1);
        frame.shutter_speed = Some("1/125".to_string());
        frame.aperture = Some("5.6".to_string());
        frame.note = Some("backlit portrait".to_string());
        frame.location = Some(GeoPoint {
            latitude: 38.7223,
            longitude: -9.1393,
        });

        let lenses = HashMap::from([(1, test_lens())]);
        let opts = ExportOptions {
            artist: Some("Jane Doe".to_string()),
            copyright: Some("2024 Jane Doe".to_string()),
        };
        let out = build_commands(&test_roll(), Some(&test_camera()), &[frame], &lenses, &opts);

        assert_eq!(
            out,
            "exiftool -Make=\"Canon\" -Model=\"A-1\" -LensMake=\"Canon\" \
             -LensModel=\"FD 50mm\" -DateTime=\"2024:07:02 15:42:00\" \
             -ShutterSpeedValue=1/125 -ApertureValue=5.6 \
             -UserComment=\"backlit portrait\" -GPSLatitude=\"38.7223\" \
             -GPSLatitudeRef=N -GPSLongitude=\"9.1393\" -GPSLongitudeRef=W \
             -Artist=\"Jane Doe\" -Copyright=\"2024 Jane Doe\" \
             \"summer_in_lisbon_12.jpg\";\n\n"
        );
    }

    #[test]
    fn test_bare_frame_has_only_filename() {
        let out = build_commands(
            &test_roll(),
            None,
            &[bare_frame(1)],
            &HashMap::new(),
            &ExportOptions::default(),
        );
        assert_eq!(out, "exiftool \"summer_in_lisbon_01.jpg\";\n\n");
    }

    #[test]
    fn test_bulb_shutter_omitted() {
        let mut frame = bare_frame(1);
        frame.shutter_speed = Some("B".to_string());
        let out = build_commands(
            &test_roll(),
            None,
            &[frame],
            &HashMap::new(),
            &ExportOptions::default(),
        );
        assert!(!out.contains("ShutterSpeedValue"));
    }

    #[test]
    fn test_whole_second_shutter_loses_quote_mark() {
        let mut frame = bare_frame(1);
        frame.shutter_speed = Some("30\"".to_string());
        let out = build_commands(
            &test_roll(),
            None,
            &[frame],
            &HashMap::new(),
            &ExportOptions::default(),
        );
        assert!(out.contains("-ShutterSpeedValue=30 "));
    }

    #[test]
    fn test_southern_western_hemisphere_refs() {
        let mut frame = bare_frame(1);
        frame.location = Some(GeoPoint {
            latitude: -33.8688,
            longitude: -70.6693,
        });
        let out = build_commands(
            &test_roll(),
            None,
            &[frame],
            &HashMap::new(),
            &ExportOptions::default(),
        );
        assert!(out.contains("-GPSLatitude=\"33.8688\" -GPSLatitudeRef=S"));
        assert!(out.contains("-GPSLongitude=\"70.6693\" -GPSLongitudeRef=W"));
    }

    #[test]
    fn test_embedded_quotes_escaped() {
        let mut frame = bare_frame(1);
        frame.note = Some("she said \"hold still\"".to_string());
        let out = build_commands(
            &test_roll(),
            None,
            &[frame],
            &HashMap::new(),
            &ExportOptions::default(),
        );
        assert!(out.contains("-UserComment=\"she said \\\"hold still\\\"\""));
    }

    #[test]
    fn test_one_command_per_frame_with_blank_lines() {
        let frames = vec![bare_frame(1), bare_frame(2), bare_frame(3)];
        let out = build_commands(
            &test_roll(),
            None,
            &frames,
            &HashMap::new(),
            &ExportOptions::default(),
        );
        assert_eq!(out.matches("exiftool").count(), 3);
        assert_eq!(out.matches(";\n\n").count(), 3);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Summer in Lisbon"), "summer_in_lisbon");
        assert_eq!(file_stem("Tri-X #3 (pushed)"), "tri_x_3_pushed");
        assert_eq!(file_stem("???"), "roll");
    }
}
