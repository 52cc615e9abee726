mod point_states;
