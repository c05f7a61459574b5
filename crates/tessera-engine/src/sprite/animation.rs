use crate::coords::{Rect, Vec2};
use crate::render::TextureId;

use super::Sprite;

/// Looping frame animation over a sprite-sheet texture.
///
/// The sheet is a regular grid; frames advance left-to-right, top row first,
/// and wrap around. The quad itself is the embedded [`Sprite`].
#[derive(Debug, Clone)]
pub struct Animation {
    pub sprite: Sprite,
    frame_time: f32,
    frame_coords: Vec<Vec2>,
    playing: bool,
    timer: f32,
    frame: usize,
}

impl Animation {
    /// `grid` is the sheet size in frames (columns, rows); `frame_time` is the
    /// seconds each frame stays on screen.
    pub fn new(
        pos: Vec2,
        dims: Vec2,
        texture: TextureId,
        grid: (u32, u32),
        frame_time: f32,
    ) -> Self {
        let (cols, rows) = (grid.0.max(1), grid.1.max(1));
        let frame_w = 1.0 / cols as f32;
        let frame_h = 1.0 / rows as f32;

        let mut sprite = Sprite::new(pos, dims, texture);
        sprite.tex_rect = Rect::new(0.0, 0.0, frame_w, frame_h);

        let mut frame_coords = Vec::with_capacity((cols * rows) as usize);
        for y in 0..rows {
            for x in 0..cols {
                frame_coords.push(Vec2::new(frame_w * x as f32, frame_h * y as f32));
            }
        }

        Self {
            sprite,
            frame_time,
            frame_coords,
            playing: false,
            timer: 0.0,
            frame: 0,
        }
    }

    /// Starts playing from the current frame.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Pauses on the current frame.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Stops and rewinds to the first frame.
    pub fn stop(&mut self) {
        self.playing = false;
        self.timer = 0.0;
        self.frame = 0;
        self.apply_frame();
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Moves the sprite and, while playing, advances the frame timer.
    pub fn update(&mut self, dt: f32) {
        self.sprite.update(dt);
        if !self.playing {
            return;
        }
        if self.timer > self.frame_time {
            self.timer = 0.0;
            self.frame = (self.frame + 1) % self.frame_coords.len();
        }
        self.timer += dt;
        self.apply_frame();
    }

    fn apply_frame(&mut self) {
        let c = self.frame_coords[self.frame];
        self.sprite.tex_rect.x = c.x;
        self.sprite.tex_rect.y = c.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim() -> Animation {
        Animation::new(
            Vec2::zero(),
            Vec2::new(16.0, 16.0),
            TextureId::WHITE,
            (4, 2),
            0.1,
        )
    }

    #[test]
    fn starts_paused_on_first_frame() {
        let a = anim();
        assert!(!a.is_playing());
        assert_eq!(a.frame(), 0);
        assert_eq!(a.sprite.tex_rect, Rect::new(0.0, 0.0, 0.25, 0.5));
    }

    #[test]
    fn update_while_paused_keeps_frame() {
        let mut a = anim();
        a.update(1.0);
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn frames_advance_and_wrap() {
        let mut a = anim();
        a.play();
        // Each frame holds for frame_time; step past all eight and wrap.
        for _ in 0..100 {
            a.update(0.05);
        }
        assert!(a.frame() < 8);
        let before = a.frame();
        while a.frame() == before {
            a.update(0.05);
        }
        assert_eq!(a.frame(), (before + 1) % 8);
    }

    #[test]
    fn frame_sets_tex_rect_origin() {
        let mut a = anim();
        a.play();
        while a.frame() != 5 {
            a.update(0.06);
        }
        // Frame 5 is column 1, row 1 of the 4x2 grid.
        assert_eq!(a.sprite.tex_rect.x, 0.25);
        assert_eq!(a.sprite.tex_rect.y, 0.5);
    }

    #[test]
    fn stop_rewinds_to_first_frame() {
        let mut a = anim();
        a.play();
        for _ in 0..10 {
            a.update(0.06);
        }
        a.stop();
        assert!(!a.is_playing());
        assert_eq!(a.frame(), 0);
        assert_eq!(a.sprite.tex_rect.x, 0.0);
        assert_eq!(a.sprite.tex_rect.y, 0.0);
    }
}
