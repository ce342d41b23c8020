//! GDI drawing for the demo title bar

use windows::Win32::Foundation::{COLORREF, RECT};
use windows::Win32::Graphics::Gdi::*;

use frameless::geometry::{scale_by_ratio, Margins, Rect};
use frameless::WindowStates;

use crate::buttons::{CaptionButton, Glyph};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to COLORREF for Windows API
    pub fn colorref(&self) -> COLORREF {
        COLORREF(((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32))
    }
}

const CONTENT: Color = Color::rgb(250, 250, 250);
const TITLE_BAR: Color = Color::rgb(32, 34, 40);
const TITLE_TEXT: Color = Color::rgb(230, 230, 230);
const BUTTON_HOVER: Color = Color::rgb(60, 63, 72);
const CLOSE_HOVER: Color = Color::rgb(196, 43, 28);
const BORDER: Color = Color::rgb(90, 90, 100);

/// Everything a paint pass needs, copied out of the window state
pub struct PaintSnapshot {
    pub title: String,
    pub ratio: f64,
    pub margins: Margins,
    pub title_bar_height: i32,
    pub buttons: Vec<Rect>,
    pub hovered: Option<CaptionButton>,
    pub state: WindowStates,
    pub frameless: bool,
}

fn to_win_rect(rect: &Rect) -> RECT {
    RECT {
        left: rect.x,
        top: rect.y,
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Fill a rectangle with a solid color
pub fn fill_rect(hdc: HDC, rect: &Rect, color: Color) {
    unsafe {
        let brush = CreateSolidBrush(color.colorref());
        FillRect(hdc, &to_win_rect(rect), brush);
        let _ = DeleteObject(brush);
    }
}

/// Draw text at position
pub fn draw_text(hdc: HDC, x: i32, y: i32, text: &str, color: Color) {
    unsafe {
        let wide: Vec<u16> = text.encode_utf16().collect();
        SetBkMode(hdc, TRANSPARENT);
        let _ = SetTextColor(hdc, color.colorref());
        let _ = TextOutW(hdc, x, y, &wide);
    }
}

fn draw_line(hdc: HDC, from: (i32, i32), to: (i32, i32), color: Color, width: i32) {
    unsafe {
        let pen = CreatePen(PS_SOLID, width, color.colorref());
        let old_pen = SelectObject(hdc, pen);
        let _ = MoveToEx(hdc, from.0, from.1, None);
        let _ = LineTo(hdc, to.0, to.1);
        let _ = SelectObject(hdc, old_pen);
        let _ = DeleteObject(pen);
    }
}

fn draw_glyph(hdc: HDC, glyph: Glyph, cx: i32, cy: i32, half: i32, pen: i32) {
    let c = TITLE_TEXT;
    match glyph {
        Glyph::Dash => draw_line(hdc, (cx - half, cy), (cx + half, cy), c, pen),
        Glyph::Square => draw_box(hdc, cx - half, cy - half, cx + half, cy + half, pen),
        Glyph::Restore => {
            let off = (half / 3).max(2);
            draw_box(hdc, cx - half, cy - half + off, cx + half - off, cy + half, pen);
            draw_line(hdc, (cx - half + off, cy - half), (cx + half, cy - half), c, pen);
            draw_line(hdc, (cx + half, cy - half), (cx + half, cy + half - off), c, pen);
        }
        Glyph::Cross => {
            draw_line(hdc, (cx - half, cy - half), (cx + half + 1, cy + half + 1), c, pen);
            draw_line(hdc, (cx + half, cy - half), (cx - half - 1, cy + half + 1), c, pen);
        }
    }
}

fn draw_box(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32, pen: i32) {
    let c = TITLE_TEXT;
    draw_line(hdc, (left, top), (right, top), c, pen);
    draw_line(hdc, (right, top), (right, bottom), c, pen);
    draw_line(hdc, (right, bottom), (left, bottom), c, pen);
    draw_line(hdc, (left, bottom), (left, top), c, pen);
}

/// Paint the client area: margins, title bar and caption buttons
pub fn paint(hdc: HDC, client: &Rect, snap: &PaintSnapshot) {
    if !snap.frameless {
        fill_rect(hdc, client, CONTENT);
        return;
    }

    let s = |v: i32| scale_by_ratio(v, snap.ratio);

    // Thin frame in the margin so the window edge stays visible.
    fill_rect(hdc, client, BORDER);
    let inner = Rect::new(
        s(snap.margins.left),
        s(snap.margins.top),
        client.width - s(snap.margins.left) - s(snap.margins.right),
        client.height - s(snap.margins.top) - s(snap.margins.bottom),
    );
    fill_rect(hdc, &inner, CONTENT);

    let bar = Rect::new(inner.x, inner.y, inner.width, s(snap.title_bar_height));
    fill_rect(hdc, &bar, TITLE_BAR);
    draw_text(hdc, bar.x + s(12), bar.y + s(7), &snap.title, TITLE_TEXT);

    for (button, logical) in CaptionButton::ALL.iter().zip(snap.buttons.iter()) {
        let rect = Rect::new(
            bar.x + s(logical.x),
            bar.y + s(logical.y),
            s(logical.width),
            s(logical.height),
        );
        if snap.hovered == Some(*button) {
            let hover = if *button == CaptionButton::Close { CLOSE_HOVER } else { BUTTON_HOVER };
            fill_rect(hdc, &rect, hover);
        }
        let cx = rect.x + rect.width / 2;
        let cy = rect.y + rect.height / 2;
        draw_glyph(hdc, button.glyph(snap.state), cx, cy, s(5), s(1).max(1));
    }
}
