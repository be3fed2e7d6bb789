//! The playfield: drawing cursor, moving objects and frame composition

use glam::IVec2;

use crate::input::Command;
use crate::renderer::{Surface, draw_drawable};
use crate::sim::{Color, Drawable};

/// Trail color left by the cursor
const CURSOR_COLOR: Color = Color::Red;

/// Owns the draw surface and every drawable on it
pub struct Playfield<S: Surface> {
    surface: S,
    objects: Vec<Drawable>,
    /// Logical cursor, bounded to `[0, width] x [0, height]`
    cursor: IVec2,
}

impl<S: Surface> Playfield<S> {
    pub fn new(mut surface: S) -> Self {
        surface.clear_texture();
        Self {
            surface,
            objects: Vec::new(),
            cursor: IVec2::ZERO,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Drawable] {
        &mut self.objects
    }

    /// Append a drawable; drawables render in insertion order
    pub fn add_object(&mut self, drawable: Drawable) {
        log::debug!("Adding {} to playfield", drawable.name());
        self.objects.push(drawable);
    }

    pub fn cursor(&self) -> IVec2 {
        self.cursor
    }

    /// Reset the cursor to the origin and blank the playfield texture
    pub fn new_game(&mut self) {
        log::info!("New game");
        self.cursor = IVec2::ZERO;
        self.surface.clear_texture();
    }

    /// Apply one command. Returns true if the cursor moved.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Left | Command::Right | Command::Up | Command::Down => {
                self.move_cursor(command)
            }
            Command::Start => {
                self.new_game();
                false
            }
            Command::Pause | Command::Fast | Command::Slow => {
                log::debug!("{command:?} has no effect yet");
                false
            }
            Command::Quit | Command::None => false,
        }
    }

    fn move_cursor(&mut self, command: Command) -> bool {
        let (width, height) = self.surface.size();
        let (width, height) = (width as i32, height as i32);
        let step = match command {
            Command::Left if self.cursor.x > 0 => IVec2::NEG_X,
            Command::Right if self.cursor.x < width => IVec2::X,
            Command::Up if self.cursor.y > 0 => IVec2::NEG_Y,
            Command::Down if self.cursor.y < height => IVec2::Y,
            _ => return false,
        };
        self.cursor += step;
        self.surface.plot(self.cursor.x, self.cursor.y, CURSOR_COLOR);
        true
    }

    /// Advance every drawable by `delta` seconds and redraw the frame
    pub fn update(&mut self, delta: f64) {
        for object in &mut self.objects {
            object.advance(delta);
        }
        self.render();
    }

    fn render(&mut self) {
        self.surface.begin_frame();
        for object in &self.objects {
            draw_drawable(&mut self.surface, object);
        }
        self.surface.present();
    }
}
