//! 監査ログの進捗チャート描画
//!
//! 各エントリのインデックスを登録順の位置に対してプロットしたSVGを生成し、
//! `<img>`タグに埋め込めるdata URIとして返す。

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;

use crate::audit::AuditEntry;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const LINE_COLOR: &str = "skyblue";

/// チャートタイトル
pub const CHART_TITLE: &str = "Blockchain Progress";
/// X軸ラベル
pub const X_AXIS_LABEL: &str = "Block Index";
/// Y軸ラベル
pub const Y_AXIS_LABEL: &str = "Progress";

/// エントリ1件の注釈文字列
pub fn point_label(entry: &AuditEntry) -> String {
    format!("Block {} | {}", entry.index, entry.hash)
}

/// 0..=max の値をプロット領域の座標に写像する
fn scale(value: f64, max: f64, origin: f64, span: f64) -> f64 {
    if max <= 0.0 {
        origin
    } else {
        origin + value / max * span
    }
}

/// 監査ログのスナップショットを描画するSVGチャート
pub struct ProgressChart<'a> {
    entries: &'a [AuditEntry],
}

impl<'a> ProgressChart<'a> {
    /// エントリ列からチャートを作成
    pub fn new(entries: &'a [AuditEntry]) -> Self {
        Self { entries }
    }

    fn points(&self, x0: f64, y0: f64, plot_w: f64, plot_h: f64) -> Vec<(f64, f64, &'a AuditEntry)> {
        let max_index = self.entries.iter().map(|e| e.index).max().unwrap_or(0) as f64;
        let max_position = self.entries.len().saturating_sub(1) as f64;

        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let x = scale(entry.index as f64, max_index, x0, plot_w);
                let y = y0 - scale(position as f64, max_position, 0.0, plot_h);
                (x, y, entry)
            })
            .collect()
    }
}

impl fmt::Display for ProgressChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let x0 = MARGIN_LEFT;
        let y0 = HEIGHT - MARGIN_BOTTOM;
        let points = self.points(x0, y0, plot_w, plot_h);

        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = WIDTH,
            h = HEIGHT
        )?;
        write!(f, r#"<rect width="{}" height="{}" fill="white"/>"#, WIDTH, HEIGHT)?;
        write!(
            f,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">{}</text>"#,
            WIDTH / 2.0,
            MARGIN_TOP / 2.0 + 6.0,
            CHART_TITLE
        )?;

        // axes
        write!(
            f,
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}" stroke="black"/><line x1="{x0}" y1="{y0}" x2="{x0}" y2="{y1}" stroke="black"/>"#,
            x0 = x0,
            y0 = y0,
            x1 = x0 + plot_w,
            y1 = MARGIN_TOP
        )?;
        write!(
            f,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="12">{}</text>"#,
            x0 + plot_w / 2.0,
            HEIGHT - MARGIN_BOTTOM / 3.0,
            X_AXIS_LABEL
        )?;
        write!(
            f,
            r#"<text x="{x}" y="{y}" text-anchor="middle" font-size="12" transform="rotate(-90 {x} {y})">{}</text>"#,
            Y_AXIS_LABEL,
            x = MARGIN_LEFT / 3.0,
            y = MARGIN_TOP + plot_h / 2.0
        )?;

        if !points.is_empty() {
            f.write_str(r#"<polyline points=""#)?;
            for (i, (x, y, _)) in points.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:.1},{:.1}", x, y)?;
            }
            write!(f, r#"" fill="none" stroke="{}" stroke-width="2"/>"#, LINE_COLOR)?;
        }

        for (x, y, entry) in &points {
            write!(
                f,
                r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="10">{}</text>"#,
                x,
                y,
                LINE_COLOR,
                x + 6.0,
                y - 6.0,
                point_label(entry)
            )?;
        }

        f.write_str("</svg>")
    }
}

/// 監査ログのスナップショットからSVGを生成
///
/// 空の入力では軸とタイトルのみを描画する。
pub fn render_progress_svg(entries: &[AuditEntry]) -> String {
    ProgressChart::new(entries).to_string()
}

/// SVGをbase64 data URIの`<img>`タグとして返す
pub fn progress_chart_img_tag(entries: &[AuditEntry]) -> String {
    let encoded = BASE64.encode(render_progress_svg(entries));
    format!(r#"<img src="data:image/svg+xml;base64,{}" />"#, encoded)
}
