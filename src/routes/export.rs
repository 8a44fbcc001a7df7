//! CSV rendering for the export endpoints.

use actix_web::HttpResponse;

use crate::models::{DislikedName, LikedName, Match, Role};

/// Quote a field if it contains a separator, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    let row: Vec<String> = fields.iter().map(|f| escape(f.as_ref())).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

pub fn liked_csv(liked: &[LikedName]) -> String {
    let mut out = String::new();
    push_row(&mut out, &["Name", "Superliked", "Liked At"]);
    for like in liked {
        let liked_at = like.liked_at.to_rfc3339();
        push_row(
            &mut out,
            &[like.name.as_str(), flag(like.superliked), liked_at.as_str()],
        );
    }
    out
}

pub fn disliked_csv(disliked: &[DislikedName]) -> String {
    let mut out = String::new();
    push_row(&mut out, &["Name", "Count", "First Dislike", "Last Dislike"]);
    for dislike in disliked {
        push_row(
            &mut out,
            &[
                dislike.name.clone(),
                dislike.count.to_string(),
                dislike.first_dislike.to_rfc3339(),
                dislike.last_dislike.to_rfc3339(),
            ],
        );
    }
    out
}

pub fn matches_csv(matches: &[Match]) -> String {
    let mut out = String::new();
    push_row(&mut out, &["Name", "Dad Superliked", "Mom Superliked"]);
    for m in matches {
        push_row(
            &mut out,
            &[
                m.name.as_str(),
                flag(m.role(Role::Dad).superliked),
                flag(m.role(Role::Mom).superliked),
            ],
        );
    }
    out
}

/// Wrap a CSV body as a file download
pub fn attachment(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRole;
    use chrono::Utc;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Emma"), "Emma");
        assert_eq!(escape("Smith, Jr"), "\"Smith, Jr\"");
        assert_eq!(escape("Say \"hi\""), "\"Say \"\"hi\"\"\"");
    }

    #[test]
    fn test_matches_csv_flags() {
        let now = Utc::now();
        let csv = matches_csv(&[Match {
            name: "Olivia".to_string(),
            mom: MatchRole { liked_at: now, superliked: true },
            dad: MatchRole { liked_at: now, superliked: false },
        }]);
        assert_eq!(csv, "Name,Dad Superliked,Mom Superliked\r\nOlivia,0,1\r\n");
    }
}
