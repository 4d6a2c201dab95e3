mod address;
mod end_to_end;
mod firewall;
mod queues;
mod source;
mod viz_meta;
