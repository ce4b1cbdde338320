//! Drawing primitives.
//!
//! Every operation clips against the destination first and composites by
//! the source alpha. Fully transparent source pixels are skipped without
//! touching the destination, fully opaque ones overwrite it directly, and
//! only the values in between go through [`Color::blend`].

use crate::color::Color;
use crate::image::{Area, Image};

impl Image {
    /// Blits `img` 1:1 with its top-left corner at (x, y); parts outside
    /// the destination are clipped away
    pub fn draw_image(&mut self, img: &Image, x: i32, y: i32) {
        let (dw, dh) = (self.width as i32, self.height as i32);
        if x > dw || y > dh || x + (img.width as i32) < 0 || y + (img.height as i32) < 0 {
            return;
        }

        let startx = x.clamp(0, dw);
        let starty = y.clamp(0, dh);
        let endx = (x + img.width as i32).clamp(0, dw);
        let endy = (y + img.height as i32).clamp(0, dh);

        for j in starty..endy {
            for i in startx..endx {
                let c = img.get((i - x) as u32, (j - y) as u32);
                if c.a == 0 {
                    continue;
                }
                if c.a == 255 {
                    self.set(i as u32, j as u32, c);
                } else {
                    self.blend_pixel(i as u32, j as u32, c);
                }
            }
        }
    }

    /// Blits `img` stretched onto the `w` x `h` rectangle at (x, y),
    /// sampling the nearest source pixel for every destination pixel
    pub fn draw_image_scaled(&mut self, img: &Image, x: i32, y: i32, w: i32, h: i32) {
        if img.width == 0 || img.height == 0 {
            return;
        }
        let (dw, dh) = (self.width as i32, self.height as i32);
        if x > dw || y > dh || x + w < 0 || y + h < 0 {
            return;
        }

        let startx = x.clamp(0, dw);
        let starty = y.clamp(0, dh);
        let endx = (x + w).clamp(0, dw);
        let endy = (y + h).clamp(0, dh);
        let fx = w as f32 / img.width as f32;
        let fy = h as f32 / img.height as f32;

        for j in starty..endy {
            for i in startx..endx {
                let localx = ((i - x) as f32 / fx) as i32;
                let localy = ((j - y) as f32 / fy) as i32;
                let c = img.get_safe(localx, localy);
                if c.a == 0 {
                    continue;
                }
                if c.a == 255 {
                    self.set(i as u32, j as u32, c);
                } else {
                    self.blend_pixel(i as u32, j as u32, c);
                }
            }
        }
    }

    /// Blits the `imgw` x `imgh` rectangle of `img` at (imgx, imgy) onto the
    /// same-sized rectangle at (x, y). The source rectangle is clamped to
    /// the source image before anything is read.
    pub fn draw_image_part(
        &mut self,
        img: &Image,
        x: i32,
        y: i32,
        imgx: i32,
        imgy: i32,
        imgw: i32,
        imgh: i32,
    ) {
        let (dw, dh) = (self.width as i32, self.height as i32);
        if x > dw || y > dh || x + imgw < 0 || y + imgh < 0 {
            return;
        }

        let imgx = imgx.clamp(0, img.width as i32);
        let imgy = imgy.clamp(0, img.height as i32);
        let imgw = imgw.clamp(0, img.width as i32 - imgx);
        let imgh = imgh.clamp(0, img.height as i32 - imgy);
        let startx = x.clamp(0, dw);
        let starty = y.clamp(0, dh);
        let endx = (x + imgw).clamp(0, dw);
        let endy = (y + imgh).clamp(0, dh);

        for j in starty..endy {
            for i in startx..endx {
                let c = img.get((i - x + imgx) as u32, (j - y + imgy) as u32);
                if c.a == 0 {
                    continue;
                }
                if c.a == 255 {
                    self.set(i as u32, j as u32, c);
                } else {
                    self.blend_pixel(i as u32, j as u32, c);
                }
            }
        }
    }

    /// Blits the part of `img` described by `area` to (x, y)
    pub fn draw_image_area(&mut self, img: &Image, x: i32, y: i32, area: Area) {
        self.draw_image_part(img, x, y, area.x, area.y, area.w, area.h);
    }

    /// Blits the `sw` x `sh` source rectangle at (sx, sy) onto the
    /// `dw` x `dh` destination rectangle at (dx, dy), resampling nearest
    /// neighbor. Mapped source pixels outside the source rectangle and
    /// destination pixels outside the image are skipped.
    pub fn draw_image_part_scaled(
        &mut self,
        img: &Image,
        sx: i32,
        sy: i32,
        sw: i32,
        sh: i32,
        dx: i32,
        dy: i32,
        dw: i32,
        dh: i32,
    ) {
        let (width, height) = (self.width as i32, self.height as i32);
        if dx > width || dy > height || dx + dw < 0 || dy + dh < 0 {
            return;
        }
        if dw <= 0 || dh <= 0 {
            return;
        }

        let sx = sx.clamp(0, img.width as i32);
        let sy = sy.clamp(0, img.height as i32);
        let sw = sw.clamp(0, img.width as i32 - sx);
        let sh = sh.clamp(0, img.height as i32 - sy);
        let deltax = sw as f32 / dw as f32;
        let deltay = sh as f32 / dh as f32;

        for j in 0..dh {
            for i in 0..dw {
                let px = (i as f32 * deltax) as i32 + sx;
                let py = (j as f32 * deltay) as i32 + sy;
                if px < 0 || py < 0 || px >= img.width as i32 || py >= img.height as i32 {
                    continue;
                }
                let px2 = i + dx;
                let py2 = j + dy;
                if px2 < 0 || py2 < 0 || px2 >= width || py2 >= height {
                    continue;
                }
                let c = img.get(px as u32, py as u32);
                if c.a == 0 {
                    continue;
                }
                if c.a == 255 {
                    self.set(px2 as u32, py2 as u32, c);
                } else {
                    self.blend_pixel(px2 as u32, py2 as u32, c);
                }
            }
        }
    }

    /// Draws a line from (x0, y0) to (x1, y1), compositing `c` over every
    /// covered pixel that lies inside the image
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Color) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x0 >= 0 && y0 >= 0 && x0 < self.width as i32 && y0 < self.height as i32 {
                self.blend_pixel(x0 as u32, y0 as u32, c);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fills the `w` x `h` rectangle at (x, y) with `c`, compositing by its
    /// alpha; a fully transparent color draws nothing
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Color) {
        if c.a == 0 {
            return;
        }
        let (dw, dh) = (self.width as i32, self.height as i32);
        if x > dw || y > dh || x + w < 0 || y + h < 0 {
            return;
        }

        let startx = x.clamp(0, dw);
        let starty = y.clamp(0, dh);
        let endx = (x + w).clamp(0, dw);
        let endy = (y + h).clamp(0, dh);

        for j in starty..endy {
            for i in startx..endx {
                if c.a == 255 {
                    self.set(i as u32, j as u32, c);
                } else {
                    self.blend_pixel(i as u32, j as u32, c);
                }
            }
        }
    }

    /// Draws `text` with a fixed-cell bitmap font sheet starting at (x, y).
    ///
    /// Each character maps to frame `code - first_char` of `font`; a
    /// newline returns the cursor to the start column and moves down one
    /// cell. The stock sheets use 7x9 cells starting at the space
    /// character (32).
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: &Image,
        font_w: i32,
        font_h: i32,
        first_char: u8,
    ) {
        let start_x = x;
        let mut x = x;
        let mut y = y;
        for code in text.bytes() {
            if code == b'\n' {
                y += font_h;
                x = start_x;
                continue;
            }
            let frame = font.frame_area(code as i32 - first_char as i32, font_w, font_h);
            self.draw_image_area(font, x, y, frame);
            x += font_w;
        }
    }
}
