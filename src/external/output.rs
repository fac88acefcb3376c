use chip8vm::consts;
use chip8vm::DisplayBuffer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const OFF_COLOR: Color = Color::RGB(143, 145, 133);
const ON_COLOR: Color = Color::RGB(17, 29, 43);

pub struct DisplayDriver {
    pub screen: Canvas<Window>,
}

impl DisplayDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = context.video()?;
        let window = video_subsystem
            .window(
                "chip8vm",
                consts::DISPLAY_WIDTH as u32 * consts::SCALE_FACTOR,
                consts::DISPLAY_HEIGHT as u32 * consts::SCALE_FACTOR,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        canvas.set_draw_color(OFF_COLOR);
        canvas.clear();
        canvas.present();

        Ok(DisplayDriver { screen: canvas })
    }

    pub fn draw(&mut self, display: &DisplayBuffer) -> Result<(), String> {
        self.screen.set_draw_color(OFF_COLOR);
        self.screen.clear();
        self.screen.set_draw_color(ON_COLOR);
        for (y, row) in display.rows().enumerate() {
            for (x, &lit) in row.iter().enumerate() {
                if !lit {
                    continue;
                }
                let i = (x as u32) * consts::SCALE_FACTOR;
                let j = (y as u32) * consts::SCALE_FACTOR;
                self.screen.fill_rect(Rect::new(
                    i as i32,
                    j as i32,
                    consts::SCALE_FACTOR,
                    consts::SCALE_FACTOR,
                ))?;
            }
        }
        self.screen.present();
        Ok(())
    }
}
