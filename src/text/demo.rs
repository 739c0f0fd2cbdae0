/// Sample compiler output used by `textwindow --demo`.
pub const DEMO_TEXT: &str = r#"selfdrive/ui/ui.cc:23:12: error: unused variable 'scene' [-Werror,-Wunused-variable]
   23 |   UIScene &scene = s->scene;
      |            ^~~~~
selfdrive/ui/ui.cc:39:3: error: expected unqualified-id
   39 |   if (sm.updated("pandaStates")) {
      |   ^
selfdrive/ui/ui.cc:51:5: error: expected unqualified-id
   51 |   } else if ((s->sm->frame - s->sm->rcv_frame("pandaStates")) > 5*UI_FREQ) {
      |     ^
selfdrive/ui/ui.cc:54:3: error: expected unqualified-id
   54 |   if (sm.updated("wideRoadCameraState")) {
      |   ^
selfdrive/ui/ui.cc:58:5: error: expected unqualified-id
   58 |   } else if (!sm.allAliveAndValid({"wideRoadCameraState"})) {
      |     ^
selfdrive/ui/ui.cc:61:3: error: unknown type name 'scene'
   61 |   scene.started = sm["deviceState"].getDeviceState().getStarted() && scene.ignition;
      |   ^
selfdrive/ui/ui.cc:61:8: error: cannot use dot operator on a type
   61 |   scene.started = sm["deviceState"].getDeviceState().getStarted() && scene.ignition;
      |        ^
selfdrive/ui/ui.cc:62:1: error: extraneous closing brace ('}')
   62 | }
      | ^
8 errors generated.
scons: *** [selfdrive/ui/ui.o] Error 1"#;
