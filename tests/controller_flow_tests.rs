mod controller_flow;
