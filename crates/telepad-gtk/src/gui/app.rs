use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::theme::ThemeColors;
use crate::gui::view;
use crate::sys::actions;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use telepad::kurbo::Point;
use telepad::{PointerEvent, RemotePad, Zone};

const DEFAULT_WINDOW_SIZE: i32 = 360;

pub struct AppModel {
    pub pad: Rc<RefCell<RemotePad>>,
    pub config: Config,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    Pointer(PointerEvent),
    MenuSelected(Zone),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        RemotePad,
        Config,
        PathBuf,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Telepad"),
            set_default_size: (DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Pointer(PointerEvent::Cancel));
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::GestureDrag {
                    set_button: gdk4::BUTTON_PRIMARY,

                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::Pointer(PointerEvent::Press(Point::new(x, y))));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::Pointer(PointerEvent::Move(Point::new(x + dx, y + dy))));
                        }
                    },
                    connect_drag_end[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::Pointer(PointerEvent::Release(Point::new(x + dx, y + dy))));
                        }
                    },
                    connect_cancel[sender] => move |_, _| {
                        sender.input(AppMsg::Pointer(PointerEvent::Cancel));
                    },
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (mut pad, config, config_path, rx) = init;

        let listener_sender = sender.clone();
        pad.set_listener(move |zone: Zone| listener_sender.input(AppMsg::MenuSelected(zone)));

        let mut model = AppModel {
            pad: Rc::new(RefCell::new(pad)),
            config,
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();
        model.drawing_area = widgets.drawing_area.clone();

        let pad_draw = model.pad.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                if let Err(e) = view::draw(cr, &pad_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.present();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                self.pad.borrow_mut().resize(width as f64, height as f64);
                self.drawing_area.queue_draw();
            }
            AppMsg::Pointer(event) => {
                let action = self.pad.borrow_mut().handle(event);
                if action.should_redraw {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::MenuSelected(zone) => actions::run(zone, self.config.action_for(zone)),
            AppMsg::ConfigReload => {
                let reloaded = config::load_config(&self.config_path)
                    .and_then(|c| c.geometry_config().map(|geometry| (c, geometry)));
                match reloaded {
                    Ok((new_config, geometry)) => {
                        self.pad.borrow_mut().reconfigure(geometry);
                        self.config = new_config;
                        self.drawing_area.queue_draw();
                        log::info!("Configuration reloaded");
                    }
                    Err(e) => log::error!("Failed to reload config: {}", e),
                }
            }
        }
    }
}
