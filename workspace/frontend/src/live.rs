use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::StreamExt;
use gloo_net::websocket::futures::WebSocket;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use compute::{LiveAction, LiveEvent, LivePhase, LiveUpdates};

use crate::settings;

/// Opens the push-update channel at `/ws/changes` and drives the phase
/// machine. `on_change` fires on every inbound message (payload ignored)
/// and, once the channel has failed, on every polling tick. Returns the
/// current phase for display.
///
/// The socket reader and the polling timer are mutually exclusive per mount
/// and both are released when the component unmounts.
#[hook]
pub fn use_live_updates(on_change: Callback<()>) -> UseStateHandle<LivePhase> {
    let phase = use_state(|| LivePhase::Connecting);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let app_settings = settings::get_settings();
            let machine = Rc::new(RefCell::new(LiveUpdates::new()));
            let poller: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let unmounted = Rc::new(Cell::new(false));

            let apply = {
                let machine = machine.clone();
                let poller = poller.clone();
                let unmounted = unmounted.clone();
                let poll_interval_ms = app_settings.poll_interval_ms;
                Rc::new(move |event: LiveEvent| {
                    if unmounted.get() {
                        return;
                    }
                    let action = machine.borrow_mut().apply(event);
                    phase.set(machine.borrow().phase());
                    match action {
                        LiveAction::Refresh => {
                            log::debug!("push message received, refreshing");
                            on_change.emit(());
                        }
                        LiveAction::StartPolling => {
                            log::info!("arming polling fallback every {} ms", poll_interval_ms);
                            let on_change = on_change.clone();
                            *poller.borrow_mut() = Some(Interval::new(poll_interval_ms, move || {
                                log::trace!("polling tick");
                                on_change.emit(());
                            }));
                        }
                        LiveAction::None => {}
                    }
                })
            };

            let url = app_settings.changes_url();
            log::debug!("opening push-update channel at {}", url);
            let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

            match WebSocket::open(&url) {
                Ok(socket) => {
                    let apply = apply.clone();
                    spawn_local(async move {
                        let mut socket = socket.fuse();
                        let mut cancel_rx = cancel_rx;
                        loop {
                            futures::select! {
                                _ = cancel_rx => {
                                    log::trace!("push channel reader cancelled");
                                    break;
                                }
                                message = socket.next() => match message {
                                    Some(Ok(_)) => apply(LiveEvent::Message),
                                    Some(Err(e)) => {
                                        log::warn!("push channel error: {:?}", e);
                                        apply(LiveEvent::ConnectionLost);
                                        break;
                                    }
                                    None => {
                                        log::warn!("push channel closed by server");
                                        apply(LiveEvent::ConnectionLost);
                                        break;
                                    }
                                },
                            }
                        }
                        // The socket closes when it drops here.
                    });
                }
                Err(e) => {
                    log::warn!("failed to open push channel: {:?}", e);
                    apply(LiveEvent::ConnectionLost);
                }
            }

            move || {
                unmounted.set(true);
                poller.borrow_mut().take();
                let _ = cancel_tx.send(());
            }
        });
    }

    phase
}
