// File: crates/chartkit-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, sizes, rects, saturating division).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }
    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn bottom(&self) -> f32 { self.y + self.height }
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// Values that can be blended between two endpoints for animation.
pub trait Interpolate {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        Point { x: f32::interpolate(&from.x, &to.x, t), y: f32::interpolate(&from.y, &to.y, t) }
    }
}

impl Interpolate for Rect {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        Rect {
            x: f32::interpolate(&from.x, &to.x, t),
            y: f32::interpolate(&from.y, &to.y, t),
            width: f32::interpolate(&from.width, &to.width, t),
            height: f32::interpolate(&from.height, &to.height, t),
        }
    }
}

/// Division that yields 0 instead of NaN/Infinity when the divisor is zero
/// or the quotient is not finite.
#[inline]
pub fn safe_div(n: f64, d: f64) -> f64 {
    if d == 0.0 {
        return 0.0;
    }
    let q = n / d;
    if q.is_finite() { q } else { 0.0 }
}

/// `f32` flavour of [`safe_div`] for pixel math.
#[inline]
pub fn safe_div_f32(n: f32, d: f32) -> f32 {
    if d == 0.0 {
        return 0.0;
    }
    let q = n / d;
    if q.is_finite() { q } else { 0.0 }
}
