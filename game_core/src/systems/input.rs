use hecs::World;

use crate::components::*;
use crate::input::InputLatch;

/// Copy the latched key state onto each paddle's intent
pub fn ingest_inputs(world: &mut World, input: &InputLatch) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.side);
    }
}
