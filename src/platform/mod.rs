//=========================================================================
// Platform Integration
//
// Adapters from windowing backends to the panel layer's input types.
//
// The coordinator never owns a window or an event loop. A host collects
// its backend's events for the frame, converts them here and passes the
// batch to `UiCoordinator::update`:
//
// ```text
//  winit WindowEvent ──From──> InputEvent ──> Vec<InputEvent>
//                                                  ↓ (frame boundary)
//                                      UiCoordinator::update(dt, &events)
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
