//! Wavefield entry point
//!
//! On wasm32 this mounts an SVG into the host container, wires pointer and
//! resize events, and drives one simulation tick per animation frame. The
//! native build runs a headless smoke pass for quick sanity checks.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent, TouchEvent};

    use wavefield::render::{dash_array, line_paths, path_data};
    use wavefield::settings::Settings;
    use wavefield::sim::{Bounds, Simulation, tick};

    const SVG_NS: &str = "http://www.w3.org/2000/svg";
    /// The host supplies a container element with this id; optional
    /// `data-settings` JSON on it overrides the defaults.
    const CONTAINER_ID: &str = "wavefield";

    /// Everything the animation owns: the simulation plus the SVG nodes it
    /// keeps in sync with the grid.
    struct App {
        sim: Simulation,
        settings: Settings,
        container: Element,
        svg: Element,
        paths: Vec<Element>,
        /// Rebuild count last synced into path elements
        grid_generation: u64,
        running: bool,
    }

    impl App {
        fn container_bounds(container: &Element) -> Bounds {
            let rect = container.get_bounding_client_rect();
            Bounds::new(
                rect.width() as f32,
                rect.height() as f32,
                rect.left() as f32,
                rect.top() as f32,
            )
        }

        fn new(document: &Document, container: Element, settings: Settings) -> Result<Self, JsValue> {
            let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
            svg.set_attribute(
                "style",
                "display:block;width:100%;height:100%;pointer-events:none",
            )?;
            container.append_child(&svg)?;

            let bounds = Self::container_bounds(&container);
            let seed = js_sys::Date::now() as u64;
            let sim = Simulation::new(bounds, seed);

            let mut app = Self {
                sim,
                settings,
                container,
                svg,
                paths: Vec::new(),
                grid_generation: 0,
                running: true,
            };
            app.sync_paths(document)?;
            Ok(app)
        }

        /// Recreate one `<path>` element per grid line. Runs at mount and
        /// after every rebuild; dash textures are fixed until the next one.
        fn sync_paths(&mut self, document: &Document) -> Result<(), JsValue> {
            for p in self.paths.drain(..) {
                p.remove();
            }
            for line in &self.sim.grid().lines {
                let path = document.create_element_ns(Some(SVG_NS), "path")?;
                path.set_attribute("fill", "none")?;
                path.set_attribute("stroke", &self.settings.line_color)?;
                path.set_attribute("stroke-width", "1")?;
                path.set_attribute("stroke-opacity", "0.5")?;
                path.set_attribute("stroke-dasharray", &dash_array(&line.dash))?;
                self.svg.append_child(&path)?;
                self.paths.push(path);
            }
            self.grid_generation = self.sim.rebuild_count();
            Ok(())
        }

        fn frame(&mut self, document: &Document) {
            tick(&mut self.sim, &self.settings);

            if self.grid_generation != self.sim.rebuild_count() {
                if let Err(e) = self.sync_paths(document) {
                    log::warn!("Failed to rebuild path elements: {e:?}");
                }
            }

            for (el, prim) in self.paths.iter().zip(line_paths(self.sim.grid())) {
                let _ = el.set_attribute("d", &path_data(&prim));
                let _ = el.set_attribute("stroke-dashoffset", &format!("{:.1}", prim.dash_offset));
            }
        }

        fn apply_settings(&mut self, settings: Settings) {
            if settings.line_color != self.settings.line_color {
                for el in &self.paths {
                    let _ = el.set_attribute("stroke", &settings.line_color);
                }
            }
            self.settings = settings;
        }

        /// Stop the loop and release every node this app created.
        fn shutdown(&mut self) {
            self.running = false;
            for p in self.paths.drain(..) {
                p.remove();
            }
            self.svg.remove();
            log::info!("Wavefield torn down");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Wavefield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            log::error!("No #{CONTAINER_ID} container element found");
            return;
        };

        let settings = read_settings(&container).unwrap_or_default();

        let app = match App::new(&document, container.clone(), settings) {
            Ok(app) => Rc::new(RefCell::new(app)),
            Err(e) => {
                log::error!("Failed to mount: {e:?}");
                return;
            }
        };

        setup_pointer_handlers(app.clone());
        setup_resize_handler(app.clone());
        setup_control_handlers(&container, app.clone());

        request_animation_frame(app);
        log::info!("Wavefield running");
    }

    fn read_settings(container: &Element) -> Option<Settings> {
        let json = container.get_attribute("data-settings")?;
        match serde_json::from_str(&json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed data-settings: {e}");
                None
            }
        }
    }

    fn setup_pointer_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Mouse move - raw viewport coordinates, converted inside the sim
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .sim
                    .point_to(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - first touch point only
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut()
                        .sim
                        .point_to(touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            let bounds = App::container_bounds(&a.container);
            a.sim.queue_resize(bounds);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_control_handlers(container: &Element, app: Rc<RefCell<App>>) {
        // Host updates data-settings, then dispatches this event on the container
        {
            let app = app.clone();
            let container = container.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(settings) = read_settings(&container) {
                    app.borrow_mut().apply_settings(settings);
                }
            });
            let _ = container.add_event_listener_with_callback(
                "wavefield:settings",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Unmount hook
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().shutdown();
            });
            let _ = container.add_event_listener_with_callback(
                "wavefield:teardown",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            if !a.running {
                return;
            }
            let document = web_sys::window().unwrap().document().unwrap();
            a.frame(&document);
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wavefield (native) starting headless smoke run...");
    run_headless();
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use wavefield::render::line_paths;
    use wavefield::settings::Settings;
    use wavefield::sim::{Bounds, Simulation, tick};

    let mut sim = Simulation::new(Bounds::size(800.0, 600.0), 0xC0FFEE);
    let settings = Settings::default();

    for t in 0..600u32 {
        // Sweep the pointer across the container to exercise the repulsion field
        let x = t as f32 / 600.0 * 800.0;
        sim.point_to(x, 300.0);
        tick(&mut sim, &settings);
    }

    let paths = line_paths(sim.grid());
    let peak = sim
        .grid()
        .lines
        .iter()
        .flat_map(|l| l.points.iter())
        .map(|p| p.disp.length())
        .fold(0.0f32, f32::max);
    log::info!(
        "600 ticks: {} paths, {} active wavefronts, peak displacement {:.1}px",
        paths.len(),
        sim.waves().len(),
        peak
    );
}
