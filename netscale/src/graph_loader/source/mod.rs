pub mod edge_list_loader;
