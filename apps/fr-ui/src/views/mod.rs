pub mod diagram_view;
