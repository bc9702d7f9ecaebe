//! Scene Renderer
//! Draws a [`Scene`] onto any plotters backend: SVG text for export, an RGBA
//! bitmap for on-screen display.

use super::color::{Rgb, BLACK, WHITE};
use super::scene::{Anchor, Mark, Scene, TextMark};
use image::{DynamicImage, RgbImage, RgbaImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Bitmap buffer does not match a {0}x{1} image")]
    Buffer(u32, u32),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw every mark of `scene` in order onto `root`.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &Scene,
    ) -> Result<(), RenderError> {
        root.fill(&rgb(WHITE)).map_err(draw_err)?;

        for mark in scene.marks() {
            match mark {
                Mark::Area(area) => {
                    let points: Vec<(i32, i32)> =
                        area.points.iter().map(|&(x, y)| (px(x), px(y))).collect();
                    root.draw(&Polygon::new(points, rgb(area.fill).filled()))
                        .map_err(draw_err)?;
                }
                Mark::Rect(rect) => {
                    if rect.width <= 0.0 || rect.height <= 0.0 {
                        continue;
                    }
                    root.draw(&Rectangle::new(
                        [
                            (px(rect.x), px(rect.y)),
                            (px(rect.x + rect.width), px(rect.y + rect.height)),
                        ],
                        rgb(rect.fill).filled(),
                    ))
                    .map_err(draw_err)?;
                }
                Mark::Line(line) => {
                    root.draw(&PathElement::new(
                        vec![
                            (px(line.from.0), px(line.from.1)),
                            (px(line.to.0), px(line.to.1)),
                        ],
                        rgb(line.color).stroke_width(1),
                    ))
                    .map_err(draw_err)?;
                }
                Mark::Circle(circle) => {
                    let center = (px(circle.cx), px(circle.cy));
                    let radius = px(circle.r);
                    root.draw(&Circle::new(
                        center,
                        radius,
                        rgb(circle.fill).mix(circle.fill_opacity).filled(),
                    ))
                    .map_err(draw_err)?;
                    if circle.stroke_width > 0.0 {
                        root.draw(&Circle::new(
                            center,
                            radius,
                            rgb(circle.stroke).stroke_width(px(circle.stroke_width).max(1) as u32),
                        ))
                        .map_err(draw_err)?;
                    }
                }
                Mark::Text(text) => Self::draw_text(root, text)?,
            }
        }

        Ok(())
    }

    fn draw_text<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        text: &TextMark,
    ) -> Result<(), RenderError> {
        let slant = if text.italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        let mut font = FontDesc::new(FontFamily::SansSerif, text.size, slant);
        if text.rotated {
            font = font.transform(FontTransform::Rotate270);
        }

        let h_pos = match text.anchor {
            Anchor::Start => HPos::Left,
            Anchor::Middle => HPos::Center,
            Anchor::End => HPos::Right,
        };
        let color = rgb(BLACK);
        let style = TextStyle::from(font)
            .color(&color)
            .pos(Pos::new(h_pos, VPos::Bottom));

        root.draw(&Text::new(
            text.content.clone(),
            (px(text.x), px(text.y)),
            style,
        ))
        .map_err(draw_err)
    }

    /// Render to a standalone SVG document.
    pub fn render_svg(scene: &Scene) -> Result<String, RenderError> {
        let mut buffer = String::new();
        {
            let root =
                SVGBackend::with_string(&mut buffer, (scene.width, scene.height)).into_drawing_area();
            Self::draw(&root, scene)?;
            root.present().map_err(draw_err)?;
        }
        Ok(buffer)
    }

    /// Render to an RGBA bitmap of the scene's size.
    pub fn render_rgba(scene: &Scene) -> Result<RgbaImage, RenderError> {
        let (width, height) = (scene.width, scene.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, scene)?;
            root.present().map_err(draw_err)?;
        }

        let image = RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer(width, height))?;
        Ok(DynamicImage::ImageRgb8(image).to_rgba8())
    }
}
