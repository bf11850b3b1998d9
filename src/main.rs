use mpr_nav::{InputEvent, Modifier, ScrollDirection, Session, ViewPlane, Volume};
use ndarray::Array3;

fn main() {
    env_logger::init();

    // Synthetic radial-gradient phantom; real data would come from a loader.
    let data = Array3::from_shape_fn((64, 64, 40), |(i, j, k)| {
        let dx = i as f32 - 32.0;
        let dy = j as f32 - 32.0;
        let dz = k as f32 - 20.0;
        (dx * dx + dy * dy + dz * dz).sqrt()
    });

    let mut session = Session::new();
    session.load_volume(Volume::new(data).expect("dimensions are positive"));

    session.handle_event(InputEvent::Press {
        view: ViewPlane::Coronal,
        x: 40.0,
        y: 25.0,
        modifier: Modifier::None,
    });
    session.handle_event(InputEvent::Scroll {
        view: ViewPlane::Axial,
        x: 32.0,
        y: 32.0,
        direction: ScrollDirection::Up,
    });

    let frame = session
        .render(ViewPlane::Axial)
        .expect("volume was just loaded");
    let image = Volume::plane_to_image(&frame.image.view()).expect("plane is non-empty");
    image.save("axial.png").expect("should write image");
}
